//! Discovery of mounted volumes.

use std::path::{Path, PathBuf};

use itertools::Itertools;
use twinpane_core::Volume;

/// List the volumes a user can browse, root volume first.
pub fn discover_volumes() -> Vec<Volume> {
    let roots = mount_points();
    roots
        .into_iter()
        .unique()
        .map(|root| {
            let name = root.display().to_string();
            let total = total_size(&root);
            Volume::new(name, root, total)
        })
        .collect()
}

#[cfg(target_os = "linux")]
fn mount_points() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("/")];
    match std::fs::read_to_string("/proc/mounts") {
        Ok(mounts) => roots.extend(parse_mounts(&mounts)),
        Err(e) => tracing::debug!("cannot read /proc/mounts: {}", e),
    }
    roots
}

#[cfg(all(unix, not(target_os = "linux")))]
fn mount_points() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("/")];
    if let Ok(entries) = std::fs::read_dir("/Volumes") {
        roots.extend(
            entries
                .filter_map(Result::ok)
                .map(|e| e.path())
                .filter(|p| p.is_dir())
                .sorted(),
        );
    }
    roots
}

#[cfg(windows)]
fn mount_points() -> Vec<PathBuf> {
    (b'A'..=b'Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
        .filter(|root| root.exists())
        .collect()
}

/// Mount points backed by a block device, in table order.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_mounts(table: &str) -> Vec<PathBuf> {
    table
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let device = fields.next()?;
            let mount = fields.next()?;
            device
                .starts_with("/dev/")
                .then(|| PathBuf::from(unescape_mount(mount)))
        })
        .collect()
}

/// Undo the octal escapes (`\040` for a space) used in the mount table.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn unescape_mount(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() {
            let value = std::str::from_utf8(&bytes[i + 1..i + 4])
                .ok()
                .and_then(|digits| u8::from_str_radix(digits, 8).ok());
            if let Some(value) = value {
                out.push(value);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(unix)]
fn total_size(root: &Path) -> Option<u64> {
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(root.as_os_str().as_bytes()).ok()?;
    let mut stat: MaybeUninit<libc::statvfs> = MaybeUninit::uninit();
    // SAFETY: c_path is a valid NUL-terminated string and stat is writable.
    let result = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if result != 0 {
        return None;
    }
    // SAFETY: statvfs succeeded, so stat is initialized.
    let stat = unsafe { stat.assume_init() };
    #[allow(clippy::unnecessary_cast)]
    Some(stat.f_blocks as u64 * stat.f_frsize as u64)
}

#[cfg(not(unix))]
fn total_size(_root: &Path) -> Option<u64> {
    None
}
