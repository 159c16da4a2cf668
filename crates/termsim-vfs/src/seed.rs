//! Sample home directory every new session starts with.

use termsim_types::error::Result;

use crate::Vfs;
use crate::memory::MemoryVfs;
use crate::path::join;

const README: &str = "Welcome to the bash terminal simulator!\nThis is a practice environment for learning command line skills.";
const SAMPLE: &str = "This is a sample text file.\nIt contains multiple lines of text.\nPerfect for practicing file operations.";
const NOTES: &str =
    "Important notes:\n- Remember to backup files\n- Use version control\n- Document your work";

/// Build a filesystem containing `home` and, when `populate` is set, the
/// sample documents beneath it.
pub fn seeded_vfs(home: &str, populate: bool) -> Result<MemoryVfs> {
    let mut vfs = MemoryVfs::new();
    vfs.create_dir_all(home)?;
    if populate {
        seed_home(&mut vfs, home)?;
    }
    Ok(vfs)
}

/// Populate an existing home directory with the sample tree.
pub fn seed_home(vfs: &mut MemoryVfs, home: &str) -> Result<()> {
    let at = |rel: &str| join(home, rel);

    vfs.create_directory(&at("Documents"))?;
    vfs.create_directory(&at("Downloads"))?;
    vfs.create_directory(&at("Desktop"))?;
    vfs.write_file(&at("README.txt"), README)?;
    vfs.write_file(&at("sample.txt"), SAMPLE)?;

    vfs.create_directory(&at("Documents/project1"))?;
    vfs.write_file(&at("Documents/notes.txt"), NOTES)?;

    vfs.write_file(&at("Downloads/file1.txt"), "Downloaded file 1")?;
    vfs.write_file(&at("Downloads/file2.txt"), "Downloaded file 2")?;

    vfs.write_file(&at("Desktop/shortcut.txt"), "Desktop shortcut")?;
    log::debug!("seeded sample tree under {home}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_layout() {
        let vfs = seeded_vfs("/home/user", true).unwrap();
        let names: Vec<String> = vfs
            .children("/home/user")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(
            names,
            vec!["Documents", "Downloads", "Desktop", "README.txt", "sample.txt"]
        );
        assert_eq!(
            vfs.read_file("/home/user/Downloads/file2.txt").unwrap(),
            "Downloaded file 2"
        );
        assert_eq!(vfs.read_file("/home/user/sample.txt").unwrap().lines().count(), 3);
    }

    #[test]
    fn unpopulated_home_is_empty() {
        let vfs = seeded_vfs("/srv/guest", false).unwrap();
        assert!(vfs.children("/srv/guest").unwrap().is_empty());
    }
}
