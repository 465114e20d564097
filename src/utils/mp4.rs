//! Reads the playback duration from the `moov/mvhd` box of MP4 and
//! QuickTime files without decoding any media.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

const MAX_BOXES: usize = 4096;

pub fn read_duration(path: &Path) -> io::Result<Option<Duration>> {
    let file = File::open(path)?;
    parse_duration(BufReader::new(file))
}

/// Walk the top-level boxes looking for `moov`, then its children for
/// `mvhd`. Returns `Ok(None)` for files without a usable header.
pub fn parse_duration<R: Read + Seek>(mut reader: R) -> io::Result<Option<Duration>> {
    let end = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let Some((moov_start, moov_end)) = find_box(&mut reader, 0, end, b"moov")? else {
        return Ok(None);
    };
    let Some((mvhd_start, mvhd_end)) = find_box(&mut reader, moov_start, moov_end, b"mvhd")? else {
        return Ok(None);
    };

    reader.seek(SeekFrom::Start(mvhd_start))?;
    let mut version = [0u8; 4];
    reader.read_exact(&mut version)?;

    let (timescale, duration) = if version[0] == 1 {
        if mvhd_end - mvhd_start < 32 {
            return Ok(None);
        }
        reader.seek(SeekFrom::Current(16))?;
        (read_u32(&mut reader)?, read_u64(&mut reader)?)
    } else {
        if mvhd_end - mvhd_start < 20 {
            return Ok(None);
        }
        reader.seek(SeekFrom::Current(8))?;
        (read_u32(&mut reader)?, u64::from(read_u32(&mut reader)?))
    };

    if timescale == 0 || duration == u64::from(u32::MAX) || duration == u64::MAX {
        return Ok(None);
    }
    Ok(Duration::try_from_secs_f64(duration as f64 / f64::from(timescale)).ok())
}

/// Find the first box of type `wanted` in `[start, end)`. Returns the range
/// of its payload.
fn find_box<R: Read + Seek>(
    reader: &mut R,
    start: u64,
    end: u64,
    wanted: &[u8; 4],
) -> io::Result<Option<(u64, u64)>> {
    let mut pos = start;

    for _ in 0..MAX_BOXES {
        if pos.saturating_add(8) > end {
            return Ok(None);
        }
        reader.seek(SeekFrom::Start(pos))?;

        let size32 = match read_u32(reader) {
            Ok(size) => size,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e),
        };
        let mut kind = [0u8; 4];
        reader.read_exact(&mut kind)?;

        let (header, size) = match size32 {
            0 => (8, end - pos),
            1 => (16, read_u64(reader)?),
            n => (8, u64::from(n)),
        };
        // Sizes are untrusted; a box must fit inside its parent.
        let Some(box_end) = pos.checked_add(size).filter(|&e| size >= header && e <= end) else {
            return Ok(None);
        };

        if &kind == wanted {
            return Ok(Some((pos + header, box_end)));
        }
        pos = box_end;
    }

    Ok(None)
}

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

fn read_u64<R: Read>(reader: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}
