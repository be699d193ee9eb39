use memchr::memchr;

/// Percent-decodes segment text. Malformed escapes are carried through
/// byte-for-byte and invalid UTF-8 after decoding is replaced lossily,
/// so decoding never fails.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    if memchr(b'%', bytes).is_none() {
        return input.to_string();
    }

    let mut output = Vec::with_capacity(bytes.len());
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let Some(value) = decode_hex_pair(bytes[i + 1], bytes[i + 2])
        {
            output.push(value);
            i += 3;
            continue;
        }
        output.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&output).into_owned()
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    fn val(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    Some(val(hi)? << 4 | val(lo)?)
}
