use std::{
    fs::File,
    io::{self, Cursor, Read, Seek, SeekFrom},
};

/// A seekable source of object bytes.
///
/// Sources that already know their total length report it through
/// `known_len` so measuring them needs no seeking. Everything else is
/// measured by seeking to the end and back.
pub trait ObjectContent: Read + Seek + Send {
    fn known_len(&self) -> Option<u64> {
        None
    }
}

impl<T> ObjectContent for Cursor<T>
where
    T: AsRef<[u8]> + Send,
{
    fn known_len(&self) -> Option<u64> {
        Some(self.get_ref().as_ref().len() as u64)
    }
}

impl ObjectContent for File {}

impl<C: ObjectContent + ?Sized> ObjectContent for Box<C> {
    fn known_len(&self) -> Option<u64> {
        (**self).known_len()
    }
}

/// Returns the total size of `content` and leaves it positioned at the start.
pub fn measure(content: &mut dyn ObjectContent) -> io::Result<u64> {
    if let Some(len) = content.known_len() {
        content.seek(SeekFrom::Start(0))?;
        return Ok(len);
    }

    let end = content.seek(SeekFrom::End(0))?;
    let begin = content.seek(SeekFrom::Start(0))?;

    Ok(end - begin)
}

/// Measures `content` and reads exactly that many bytes from the start.
pub fn read_all(content: &mut dyn ObjectContent) -> io::Result<(Vec<u8>, u64)> {
    let size = measure(content)?;

    let mut buf = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    content.take(size).read_to_end(&mut buf)?;

    if (buf.len() as u64) < size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("object content ended after {} of {} bytes", buf.len(), size),
        ));
    }

    Ok((buf, size))
}
