use std::io::{BufReader, Read};
use std::path::Path;
use std::{fs, io};

use log::trace;
use serde::de::DeserializeOwned;

mod macros;

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(4 * 1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}

pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    trace!("writing to: {}", path.as_ref().display());
    fs::write(path, contents)
}

/// Groups the digits of `value` in blocks of three, separated by commas.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }

        result.push(c);
    }

    result
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(10_300), "10,300");
        assert_eq!(group_thousands(360_000), "360,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_split_exact() {
        assert_eq!("09:00".split_exact::<2>(":"), [Some("09"), Some("00")]);
        assert_eq!("0900".split_exact::<2>(":"), [Some("0900"), None]);
        assert_eq!(
            "09:00:00".split_exact::<2>(":"),
            [Some("09"), Some("00:00")]
        );
        assert_eq!(
            "2026-08-05".split_exact::<3>("-"),
            [Some("2026"), Some("08"), Some("05")]
        );
    }
}
