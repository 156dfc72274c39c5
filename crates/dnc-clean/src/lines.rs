use std::io::{self, BufRead};

pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Appends the next line of `reader` to `buf`, terminator included. A line
/// ends at `\n`, `\r\n` or a bare `\r`. Returns the number of bytes appended,
/// zero at end of input.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let start = buf.len();
    loop {
        let available = fill(reader)?;
        if available.is_empty() {
            break;
        }
        match available.iter().position(|b| matches!(b, b'\n' | b'\r')) {
            Some(pos) => {
                let terminator = available[pos];
                buf.extend_from_slice(&available[..=pos]);
                reader.consume(pos + 1);
                if terminator == b'\r' && fill(reader)?.first() == Some(&b'\n') {
                    buf.push(b'\n');
                    reader.consume(1);
                }
                break;
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
    Ok(buf.len() - start)
}

fn fill<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<&[u8]> {
    loop {
        match reader.fill_buf() {
            Ok(_) => break,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    reader.fill_buf()
}

pub fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}
