//! In-memory VFS implementation.
//!
//! The whole tree lives in a `BTreeMap` keyed by normalized absolute path.
//! Each entry also carries a sequence number so a directory's children can
//! be listed in the order they were created, which is the order `find`
//! walks them in.

use std::collections::BTreeMap;

use termsim_types::error::{Result, ShellError};

use crate::path::{base_name, is_within, join, parent};
use crate::{DIR_SIZE, EntryKind, Node, Vfs, VfsEntry};

#[derive(Debug, Clone)]
struct Slot {
    seq: u64,
    node: Node,
}

/// A fully in-memory virtual file system.
#[derive(Debug, Clone)]
pub struct MemoryVfs {
    nodes: BTreeMap<String, Slot>,
    next_seq: u64,
}

impl MemoryVfs {
    /// Create a new in-memory VFS with only the root directory.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(
            "/".to_string(),
            Slot {
                seq: 0,
                node: Node::Directory,
            },
        );
        Self { nodes, next_seq: 1 }
    }

    fn insert(&mut self, path: String, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.nodes.insert(path, Slot { seq, node });
    }

    fn require_parent_dir(&self, path: &str) -> Result<()> {
        match self.kind(parent(path)) {
            Some(EntryKind::Directory) => Ok(()),
            _ => Err(ShellError::NoSuchPath(path.to_string())),
        }
    }

    /// Keys strictly below `dir`, in map order.
    fn descendant_keys(&self, dir: &str) -> Vec<String> {
        let prefix = child_prefix(dir);
        self.nodes
            .range(prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&prefix))
            .filter(|(k, _)| k.len() > prefix.len())
            .map(|(k, _)| k.clone())
            .collect()
    }

    fn child_names(&self, dir: &str) -> Vec<(u64, String, &Node)> {
        let prefix = child_prefix(dir);
        let mut out: Vec<(u64, String, &Node)> = self
            .nodes
            .range(prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&prefix))
            // The root key "/" is its own prefix.
            .filter(|(k, _)| k.len() > prefix.len() && !k[prefix.len()..].contains('/'))
            .map(|(k, slot)| (slot.seq, k[prefix.len()..].to_string(), &slot.node))
            .collect();
        out.sort_by_key(|(seq, _, _)| *seq);
        out
    }

    /// Validate a copy/move pair and clear the destination if it is replaceable.
    ///
    /// An existing directory destination is only replaced when it is empty.
    fn prepare_transfer(&mut self, source: &str, dest: &str, verb: &str) -> Result<EntryKind> {
        let Some(src_kind) = self.kind(source) else {
            return Err(ShellError::NoSuchPath(source.to_string()));
        };
        if source == "/" {
            return Err(ShellError::InvalidArgument(format!(
                "cannot {verb} the root directory"
            )));
        }
        if source == dest {
            return Err(ShellError::InvalidArgument(format!(
                "'{source}' and '{dest}' are the same file"
            )));
        }
        if src_kind == EntryKind::Directory && is_within(dest, source) {
            return Err(ShellError::InvalidArgument(format!(
                "cannot {verb} a directory, '{source}', into itself, '{dest}'"
            )));
        }
        self.require_parent_dir(dest)?;
        match (src_kind, self.kind(dest)) {
            (_, None) => {},
            (EntryKind::File, Some(EntryKind::File)) => {
                self.nodes.remove(dest);
            },
            (EntryKind::Directory, Some(EntryKind::Directory)) => {
                if !self.descendant_keys(dest).is_empty() {
                    return Err(ShellError::NotEmpty(dest.to_string()));
                }
                self.nodes.remove(dest);
            },
            (EntryKind::File, Some(EntryKind::Directory)) => {
                return Err(ShellError::IsADirectory(dest.to_string()));
            },
            (EntryKind::Directory, Some(EntryKind::File)) => {
                return Err(ShellError::NotADirectory(dest.to_string()));
            },
        }
        Ok(src_kind)
    }

    /// Subtree slots under `source` re-keyed below `dest`, ordered by sequence.
    fn rekeyed_subtree(&self, source: &str, dest: &str) -> Vec<(String, Slot)> {
        let mut moved: Vec<(String, Slot)> = self
            .descendant_keys(source)
            .into_iter()
            .filter_map(|key| {
                let slot = self.nodes.get(&key)?.clone();
                Some((format!("{dest}{}", &key[source.len()..]), slot))
            })
            .collect();
        moved.sort_by_key(|(_, slot)| slot.seq);
        moved
    }
}

impl Default for MemoryVfs {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize an absolute path: collapse `//`, fold `.`/`..`, strip trailing `/`.
fn normalize(path: &str) -> String {
    join("/", path)
}

fn child_prefix(dir: &str) -> String {
    if dir == "/" {
        "/".to_string()
    } else {
        format!("{dir}/")
    }
}

impl Vfs for MemoryVfs {
    fn get(&self, path: &str) -> Option<&Node> {
        self.nodes.get(&normalize(path)).map(|slot| &slot.node)
    }

    fn children(&self, path: &str) -> Result<Vec<VfsEntry>> {
        let path = normalize(path);
        match self.kind(&path) {
            Some(EntryKind::Directory) => {},
            Some(EntryKind::File) => return Err(ShellError::NotADirectory(path)),
            None => return Err(ShellError::NoSuchPath(path)),
        }
        Ok(self
            .child_names(&path)
            .into_iter()
            .map(|(_, name, node)| VfsEntry {
                name,
                kind: node.kind(),
                size: match node {
                    Node::File(content) => content.len() as u64,
                    Node::Directory => DIR_SIZE,
                },
            })
            .collect())
    }

    fn read_file(&self, path: &str) -> Result<String> {
        let path = normalize(path);
        match self.nodes.get(&path).map(|slot| &slot.node) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Directory) => Err(ShellError::IsADirectory(path)),
            None => Err(ShellError::NoSuchPath(path)),
        }
    }

    fn write_file(&mut self, path: &str, content: &str) -> Result<()> {
        let path = normalize(path);
        self.require_parent_dir(&path)?;
        match self.nodes.get_mut(&path) {
            Some(Slot {
                node: Node::Directory,
                ..
            }) => Err(ShellError::IsADirectory(path)),
            Some(slot) => {
                slot.node = Node::File(content.to_string());
                Ok(())
            },
            None => {
                self.insert(path, Node::File(content.to_string()));
                Ok(())
            },
        }
    }

    fn create_directory(&mut self, path: &str) -> Result<()> {
        let path = normalize(path);
        if self.nodes.contains_key(&path) {
            return Err(ShellError::AlreadyExists(path));
        }
        self.require_parent_dir(&path)?;
        self.insert(path, Node::Directory);
        Ok(())
    }

    fn create_dir_all(&mut self, path: &str) -> Result<()> {
        let path = normalize(path);
        let mut current = String::from("/");
        for seg in path.split('/').filter(|s| !s.is_empty()) {
            current = join(&current, seg);
            match self.kind(&current) {
                Some(EntryKind::Directory) => {},
                Some(EntryKind::File) => return Err(ShellError::NotADirectory(current)),
                None => self.insert(current.clone(), Node::Directory),
            }
        }
        Ok(())
    }

    fn create_file(&mut self, path: &str) -> Result<()> {
        let path = normalize(path);
        if self.nodes.contains_key(&path) {
            return Ok(());
        }
        self.require_parent_dir(&path)?;
        self.insert(path, Node::File(String::new()));
        Ok(())
    }

    fn remove(&mut self, path: &str) -> Result<()> {
        let path = normalize(path);
        match self.kind(&path) {
            Some(EntryKind::File) => {
                self.nodes.remove(&path);
                Ok(())
            },
            Some(EntryKind::Directory) => Err(ShellError::IsADirectory(path)),
            None => Err(ShellError::NoSuchPath(path)),
        }
    }

    fn remove_directory(&mut self, path: &str) -> Result<()> {
        let path = normalize(path);
        match self.kind(&path) {
            Some(EntryKind::Directory) => {},
            Some(EntryKind::File) => return Err(ShellError::NotADirectory(path)),
            None => return Err(ShellError::NoSuchPath(path)),
        }
        if path == "/" {
            return Err(ShellError::InvalidArgument(
                "Device or resource busy".to_string(),
            ));
        }
        if !self.descendant_keys(&path).is_empty() {
            return Err(ShellError::NotEmpty(path));
        }
        self.nodes.remove(&path);
        Ok(())
    }

    fn copy(&mut self, source: &str, dest: &str) -> Result<()> {
        let (source, dest) = (normalize(source), normalize(dest));
        self.prepare_transfer(&source, &dest, "copy")?;
        let root = self
            .nodes
            .get(&source)
            .map(|slot| slot.node.clone())
            .ok_or_else(|| ShellError::NoSuchPath(source.clone()))?;
        let subtree = self.rekeyed_subtree(&source, &dest);
        self.insert(dest, root);
        for (key, slot) in subtree {
            self.insert(key, slot.node);
        }
        Ok(())
    }

    fn move_to(&mut self, source: &str, dest: &str) -> Result<()> {
        let (source, dest) = (normalize(source), normalize(dest));
        self.prepare_transfer(&source, &dest, "move")?;
        let subtree = self.rekeyed_subtree(&source, &dest);
        let root = self
            .nodes
            .remove(&source)
            .ok_or_else(|| ShellError::NoSuchPath(source.clone()))?;
        for key in self.descendant_keys(&source) {
            self.nodes.remove(&key);
        }
        // The moved root joins its new parent last; descendants keep their order.
        self.insert(dest, root.node);
        for (key, slot) in subtree {
            self.nodes.insert(key, slot);
        }
        Ok(())
    }

    fn search<'a>(&'a self, root: &str, pattern: &str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(Search::new(self, root, pattern))
    }
}

/// Pre-order walk yielding paths whose base name contains a substring.
///
/// Holds only a shared borrow of the tree, so a fresh `Search` over the same
/// `MemoryVfs` always yields the same sequence.
pub struct Search<'a> {
    vfs: &'a MemoryVfs,
    pattern: String,
    stack: Vec<String>,
}

impl<'a> Search<'a> {
    pub fn new(vfs: &'a MemoryVfs, root: &str, pattern: &str) -> Self {
        let mut search = Self {
            vfs,
            pattern: pattern.to_string(),
            stack: Vec::new(),
        };
        search.push_children(&normalize(root));
        search
    }

    fn push_children(&mut self, dir: &str) {
        if self.vfs.kind(dir) != Some(EntryKind::Directory) {
            return;
        }
        let children = self.vfs.child_names(dir);
        for (_, name, _) in children.into_iter().rev() {
            self.stack.push(join(dir, &name));
        }
    }
}

impl Iterator for Search<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(path) = self.stack.pop() {
            self.push_children(&path);
            if base_name(&path).contains(self.pattern.as_str()) {
                return Some(path);
            }
        }
        None
    }
}
