use crate::consts::page_consts::PAGE_SIZE;
use crate::types::page_types::Page;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

/// One append-only file of fixed-size pages. Every access opens the file,
/// seeks to the page offset and reads or writes a whole page; there is no
/// caching layer.
#[derive(Debug, Clone)]
pub struct PagedFile {
    pub path: PathBuf, // path to the physical page file
}

impl PagedFile {
    pub fn create(path: PathBuf) -> Result<Self, io::Error> {
        // create empty file; pages are appended by the caller
        let file = File::create(&path)?;
        file.sync_all()?;
        Ok(Self { path })
    }

    pub fn open(path: PathBuf) -> Result<Self, io::Error> {
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("missing page file {}", path.display()),
            ));
        }
        Ok(Self { path })
    }

    pub fn page_count(&self) -> Result<u32, io::Error> {
        let metadata = std::fs::metadata(&self.path)?;
        Ok((metadata.len() / PAGE_SIZE as u64) as u32)
    }

    pub fn read_page(&self, page_no: u32) -> Result<Page, io::Error> {
        // open file and seek to correct page offset
        let mut file = File::open(&self.path)?;
        let offset = page_no as u64 * PAGE_SIZE as u64;
        file.seek(SeekFrom::Start(offset))?;

        // read page bytes into buffer
        let mut buf = [0u8; PAGE_SIZE];
        file.read_exact(&mut buf)?;

        Ok(Page::from_bytes(buf)) // deserialize page
    }

    pub fn write_page(&self, page_no: u32, page: &Page) -> Result<(), io::Error> {
        // open file for writing
        let mut file = OpenOptions::new().write(true).open(&self.path)?;

        // seek to page offset
        let offset = page_no as u64 * PAGE_SIZE as u64;
        file.seek(SeekFrom::Start(offset))?;

        // serialize and write page
        file.write_all(&page.to_bytes())?;
        file.sync_all()?;
        Ok(())
    }

    /// Append an empty page whose header carries the structure's per-page
    /// slot capacity. Returns the new page number and the page itself.
    pub fn append_page(&self, capacity: u32) -> Result<(u32, Page), io::Error> {
        // open file in append mode
        let mut file = OpenOptions::new().append(true).open(&self.path)?;

        // compute new page number from file length
        let metadata = file.metadata()?;
        let page_no = (metadata.len() / PAGE_SIZE as u64) as u32;

        // create and append empty page
        let page = Page::new(capacity);
        file.write_all(&page.to_bytes())?;
        file.sync_all()?;

        Ok((page_no, page))
    }
}
