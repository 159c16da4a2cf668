//! Virtual file system for termsim.
//!
//! The `Vfs` trait is the seam command handlers program against.
//! `MemoryVfs` is the only backend: a rooted tree of directories and text
//! files kept entirely in memory, one instance per shell session.

pub mod memory;
pub mod path;
pub mod seed;

use termsim_types::error::Result;

pub use memory::{MemoryVfs, Search};

/// Reported size of every directory, matching a single ext4 block.
pub const DIR_SIZE: u64 = 4096;

/// A stored filesystem node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory,
    File(String),
}

impl Node {
    pub fn kind(&self) -> EntryKind {
        match self {
            Node::Directory => EntryKind::Directory,
            Node::File(_) => EntryKind::File,
        }
    }
}

/// What kind of node a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One child of a directory, as returned by [`Vfs::children`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Content length in bytes for files, [`DIR_SIZE`] for directories.
    pub size: u64,
}

impl VfsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Path-keyed filesystem operations.
///
/// All paths are absolute. Implementations normalize them before lookup, so
/// `/a//b/` and `/a/b` name the same node.
pub trait Vfs {
    /// Look up a node.
    fn get(&self, path: &str) -> Option<&Node>;

    /// Kind of the node at `path`, if any.
    fn kind(&self, path: &str) -> Option<EntryKind> {
        self.get(path).map(Node::kind)
    }

    /// Direct children of a directory, in insertion order.
    fn children(&self, path: &str) -> Result<Vec<VfsEntry>>;

    /// Text content of a file.
    fn read_file(&self, path: &str) -> Result<String>;

    /// Create or overwrite a file. The parent directory must exist.
    fn write_file(&mut self, path: &str, content: &str) -> Result<()>;

    /// Create a single directory. The parent must already exist.
    fn create_directory(&mut self, path: &str) -> Result<()>;

    /// Create every missing directory along `path`, like `mkdir -p`.
    fn create_dir_all(&mut self, path: &str) -> Result<()>;

    /// Create an empty file unless something already exists at `path`.
    fn create_file(&mut self, path: &str) -> Result<()>;

    /// Remove a file.
    fn remove(&mut self, path: &str) -> Result<()>;

    /// Remove an empty directory.
    fn remove_directory(&mut self, path: &str) -> Result<()>;

    /// Deep-copy `source` to `dest`.
    fn copy(&mut self, source: &str, dest: &str) -> Result<()>;

    /// Re-parent `source` as `dest`.
    fn move_to(&mut self, source: &str, dest: &str) -> Result<()>;

    /// Paths under `root` whose base name contains `pattern`, in pre-order.
    fn search<'a>(&'a self, root: &str, pattern: &str) -> Box<dyn Iterator<Item = String> + 'a>;
}
