//! Reading newline-delimited IPv4 addresses into subnet groups

use crate::error::{Result, SamplerError};
use crate::subnet::SubnetGroups;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::Ipv4Addr;
use std::path::Path;
use tracing::debug;

pub struct AddressLoader;

impl AddressLoader {
    /// Load addresses from a file, one per line
    ///
    /// Blank lines are skipped. The first line that is not an IPv4 address
    /// aborts the load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SubnetGroups> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SamplerError::io(path, e))?;

        let groups = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            SamplerError::Io { source, .. } => SamplerError::io(path, source),
            other => other,
        })?;

        debug!(
            "Loaded {} addresses in {} subnets from {:?}",
            groups.address_count(),
            groups.len(),
            path
        );
        Ok(groups)
    }

    /// Parse addresses from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<SubnetGroups> {
        let mut groups = SubnetGroups::new();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| SamplerError::io("<input>", e))?;
            let invalid = || SamplerError::InvalidAddress {
                line: index + 1,
                value: String::from_utf8_lossy(&line).trim().to_string(),
            };

            // Undecodable bytes are a bad address, not a read failure
            let entry = std::str::from_utf8(&line).map_err(|_| invalid())?.trim();
            if entry.is_empty() {
                continue;
            }

            let addr = Self::parse_address(entry).ok_or_else(invalid)?;
            groups.push(addr);
        }

        Ok(groups)
    }

    fn parse_address(entry: &str) -> Option<Ipv4Addr> {
        entry.parse().ok()
    }
}
