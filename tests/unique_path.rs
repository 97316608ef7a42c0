use std::path::PathBuf;

use unique_path::{EntropyError, EntropyErrorKind, Generator, RandomSource, fill_placeholders};

/// Returns `bytes` cyclically and counts fills.
struct FixedSource {
    bytes: Vec<u8>,
    pos: usize,
    fills: usize,
}

impl FixedSource {
    fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
            fills: 0,
        }
    }
}

impl RandomSource for FixedSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        for b in dest.iter_mut() {
            *b = self.bytes[self.pos % self.bytes.len()];
            self.pos += 1;
        }
        self.fills += 1;
        Ok(())
    }
}

/// Fill number `n` (from 1) is all bytes `0x11 * n`.
struct EpochSource {
    fills: u8,
}

impl RandomSource for EpochSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fills += 1;
        dest.fill(0x11 * self.fills);
        Ok(())
    }
}

/// Succeeds `remaining` times, then fails.
struct FailingSource {
    remaining: usize,
}

impl RandomSource for FailingSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.remaining == 0 {
            return Err(EntropyError::ReadFailed {
                op: "mock",
                code: 5,
            });
        }
        self.remaining -= 1;
        dest.fill(0xab);
        Ok(())
    }
}

fn generate(source: FixedSource, model: &str) -> (String, usize) {
    let mut generator = Generator::with_source(source);
    let path = generator.generate(model).unwrap();
    let fills = generator.source().fills;

    (path.to_str().unwrap().to_owned(), fills)
}

#[test]
fn test_low_nibble_is_consumed_first() {
    let (path, _) = generate(
        FixedSource::new(&[0x12, 0x34, 0x56, 0x78]),
        "tmp-%%%%-%%%%",
    );

    assert_eq!(path, "tmp-2143-6587");
}

#[test]
fn test_full_buffer_maps_every_hex_digit() {
    let bytes = [0x10, 0x32, 0x54, 0x76, 0x98, 0xba, 0xdc, 0xfe];
    let (path, fills) = generate(FixedSource::new(&bytes), &"%".repeat(32));

    assert_eq!(path, "0123456789abcdef0123456789abcdef");
    assert_eq!(fills, 1);
}

#[test]
fn test_template_without_placeholders_never_calls_source() {
    let (path, fills) = generate(FixedSource::new(&[0]), "/var/tmp/plain.txt");

    assert_eq!(path, "/var/tmp/plain.txt");
    assert_eq!(fills, 0);
}

#[test]
fn test_empty_template_stays_empty() {
    let (path, fills) = generate(FixedSource::new(&[0]), "");

    assert_eq!(path, "");
    assert_eq!(fills, 0);
}

#[test]
fn test_refills_once_per_32_placeholders() {
    let cases = [(1, 1), (31, 1), (32, 1), (33, 2), (64, 2), (65, 3), (100, 4)];

    for (placeholders, expected) in cases {
        let (_, fills) = generate(FixedSource::new(&[0x5a]), &"%".repeat(placeholders));
        assert_eq!(fills, expected, "{placeholders} placeholders");
    }
}

#[test]
fn test_second_fill_continues_with_fresh_bytes() {
    let bytes: Vec<u8> = (0u8..32).collect();
    let (path, fills) = generate(FixedSource::new(&bytes), &"%".repeat(34));

    assert_eq!(fills, 2);
    // byte 16 = 0x10 is the first byte of the second fill
    assert_eq!(&path[32..], "01");
}

#[test]
fn test_leftover_nibbles_are_not_reused_across_calls() {
    let mut generator = Generator::with_source(EpochSource { fills: 0 });

    let first = generator.generate("a-%").unwrap();
    let second = generator.generate("b-%").unwrap();

    assert_eq!(first, PathBuf::from("a-1"));
    assert_eq!(second, PathBuf::from("b-2"));
    assert_eq!(generator.into_source().fills, 2);
}

#[test]
fn test_source_failure_returns_error() {
    let mut generator = Generator::with_source(FailingSource { remaining: 0 });

    let err = generator.generate("tmp-%%%%").unwrap_err();

    assert_eq!(err.kind(), EntropyErrorKind::ReadFailed);
    assert_eq!(err.operation(), "mock");
    assert_eq!(err.raw_os_error(), 5);
}

#[test]
fn test_failure_on_refill_produces_no_partial_path() {
    let mut generator = Generator::with_source(FailingSource { remaining: 1 });
    let mut error = None;

    let path = generator.generate_with_error("%".repeat(40), &mut error);

    assert_eq!(path, PathBuf::new());
    assert_eq!(
        error,
        Some(EntropyError::ReadFailed {
            op: "mock",
            code: 5
        })
    );
}

#[test]
fn test_failure_without_placeholders_is_impossible() {
    let mut generator = Generator::with_source(FailingSource { remaining: 0 });

    let path = generator.generate("no-placeholders").unwrap();

    assert_eq!(path, PathBuf::from("no-placeholders"));
}

#[test]
fn test_success_clears_error_slot() {
    let mut generator = Generator::with_source(FixedSource::new(&[0xff]));
    let mut error = Some(EntropyError::SourceUnavailable {
        op: "stale",
        code: 2,
    });

    let path = generator.generate_with_error("x-%%", &mut error);

    assert_eq!(path, PathBuf::from("x-ff"));
    assert!(error.is_none());
}

#[test]
fn test_fill_placeholders_counts_replacements() {
    let mut units = b"a%b%%c".to_vec();
    let mut source = FixedSource::new(&[0xc4, 0x09]);

    let replaced = fill_placeholders(&mut units, &mut source).unwrap();

    assert_eq!(replaced, 3);
    assert_eq!(units, b"a4bc9c");
}

#[test]
fn test_fill_placeholders_handles_wide_units() {
    let mut units: Vec<u16> = "d:\\%%".encode_utf16().collect();
    let mut source = FixedSource::new(&[0xe7]);

    let replaced = fill_placeholders(&mut units, &mut source).unwrap();

    assert_eq!(replaced, 2);
    assert_eq!(String::from_utf16(&units).unwrap(), "d:\\7e");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_bytes_pass_through() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let model = OsStr::from_bytes(b"\xff\x25\xfe%\x80");
    let mut generator = Generator::with_source(FixedSource::new(&[0x3d]));

    let path = generator.generate(model).unwrap();

    assert_eq!(path.as_os_str().as_bytes(), b"\xffd\xfe3\x80");
}

#[test]
fn test_entropy_error_converts_to_io_error() {
    let err = EntropyError::ResourceExhausted {
        op: "getrandom",
        code: 12,
    };

    let io: std::io::Error = err.clone().into();

    assert_eq!(io.to_string(), err.to_string());
    assert!(io.to_string().contains("getrandom"));
}
