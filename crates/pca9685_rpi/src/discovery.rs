use std::path::Path;

use tracing::{trace, warn};
use walkdir::WalkDir;

const DEVICE_DIR: &str = "/dev";
const DEVICE_PREFIX: &str = "i2c-";

///Bus numbers of every `/dev/i2c-N` device, in directory order.
pub fn discover_buses() -> Vec<u8> {
    discover_buses_in(DEVICE_DIR)
}

///Bus numbers of every `i2c-N` entry directly inside `dir`, in directory order.
///
/// Entries that can't be read are skipped with a warning, so an unreadable directory yields an empty list.
pub fn discover_buses_in(dir: impl AsRef<Path>) -> Vec<u8> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("skipping entry while searching for i2c buses: {}", err);
                None
            }
        })
        .filter_map(|entry| entry.file_name().to_str().and_then(parse_bus_number))
        .inspect(|bus| trace!("found i2c bus {}", bus))
        .collect()
}

//"i2c-12" -> 12
fn parse_bus_number(name: &str) -> Option<u8> {
    let digits = name.strip_prefix(DEVICE_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_bus_number;

    #[test]
    fn test_parse_bus_number() {
        assert_eq!(parse_bus_number("i2c-1"), Some(1));
        assert_eq!(parse_bus_number("i2c-8"), Some(8));
        assert_eq!(parse_bus_number("i2c-22"), Some(22));
        assert_eq!(parse_bus_number("i2c-"), None);
        assert_eq!(parse_bus_number("i2c-x"), None);
        assert_eq!(parse_bus_number("i2c-999"), None);
        assert_eq!(parse_bus_number("spidev0.0"), None);
        assert_eq!(parse_bus_number("ttyS0"), None);
    }
}
