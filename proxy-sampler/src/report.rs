//! Plain-text report of the selected addresses

use crate::error::{Result, SamplerError};
use crate::subnet::SubnetGroups;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub struct ReportWriter;

impl ReportWriter {
    /// Create the output file empty, truncating any previous report
    pub fn clear<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        File::create(path).map_err(|e| SamplerError::io(path, e))?;
        debug!("Cleared {:?}", path);
        Ok(())
    }

    /// Write the report for `selected` to `path`, replacing its contents
    pub fn write<P: AsRef<Path>>(path: P, selected: &SubnetGroups) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| SamplerError::io(path, e))?;

        let mut writer = BufWriter::new(file);
        Self::render(&mut writer, selected)
            .and_then(|()| writer.flush())
            .map_err(|e| SamplerError::io(path, e))?;

        debug!("Wrote {} subnets to {:?}", selected.len(), path);
        Ok(())
    }

    /// Render the report, one section per subnet in ascending order
    ///
    /// ```text
    /// 10.0.1. subnet, 2 IPs:
    /// 10.0.1.5
    /// 10.0.1.9
    ///
    /// ```
    pub fn render<W: Write>(mut out: W, selected: &SubnetGroups) -> io::Result<()> {
        for (key, addrs) in selected {
            writeln!(out, "{} subnet, {} IPs:", key.prefix(), addrs.len())?;
            for addr in addrs {
                writeln!(out, "{}", addr)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::net::Ipv4Addr;

    fn groups(addrs: &[&str]) -> SubnetGroups {
        addrs.iter().map(|s| s.parse::<Ipv4Addr>().unwrap()).collect()
    }

    fn render_to_string(selected: &SubnetGroups) -> String {
        let mut buf = Vec::new();
        ReportWriter::render(&mut buf, selected).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_section_format() {
        let text = render_to_string(&groups(&["10.0.1.5", "10.0.1.9"]));
        assert_eq!(text, "10.0.1. subnet, 2 IPs:\n10.0.1.5\n10.0.1.9\n\n");
    }

    #[test]
    fn test_render_sorted_sections() {
        let text = render_to_string(&groups(&["192.168.1.1", "10.0.2.7", "10.0.1.5"]));
        assert_eq!(
            text,
            "10.0.1. subnet, 1 IPs:\n10.0.1.5\n\n\
             10.0.2. subnet, 1 IPs:\n10.0.2.7\n\n\
             192.168.1. subnet, 1 IPs:\n192.168.1.1\n\n"
        );
    }

    #[test]
    fn test_render_subnet_without_addresses() {
        let source = groups(&["10.0.1.5", "10.0.2.7"]);
        let selected = crate::sampler::Sampler::seeded(1)
            .sample(&source, crate::sampler::SamplingPolicy::PerSubnet(0));

        assert_eq!(
            render_to_string(&selected),
            "10.0.1. subnet, 0 IPs:\n\n10.0.2. subnet, 0 IPs:\n\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_to_string(&SubnetGroups::new()), "");
    }

    #[test]
    fn test_clear_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(&path, "old report\n").unwrap();

        ReportWriter::clear(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(&path, "a much longer previous report that must disappear\n").unwrap();

        ReportWriter::write(&path, &groups(&["10.0.2.7"])).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "10.0.2. subnet, 1 IPs:\n10.0.2.7\n\n"
        );
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("results.txt");

        let err = ReportWriter::write(&path, &SubnetGroups::new()).unwrap_err();
        assert!(matches!(err, SamplerError::Io { .. }));
    }
}
