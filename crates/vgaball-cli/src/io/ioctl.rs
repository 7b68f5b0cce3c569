// crates/vgaball-cli/src/io/ioctl.rs
//
// The real device channel: ioctl(2) on the driver's device node.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use nix::errno::Errno;
use nix::sys::ioctl::ioctl_num_type;
use nix::{request_code_read, request_code_write};
use vgaball_core::error::{Result, VgaError};
use vgaball_core::wire::request::{Direction, ARG_SIZE, VGA_BALL_MAGIC};
use vgaball_core::{BallDevice, ControlBlock, Request};

/// Linux `_IOR`/`_IOW` code for `request`, as defined by the driver header.
pub fn request_code(request: Request) -> ioctl_num_type {
    match request.direction() {
        Direction::Write => request_code_write!(VGA_BALL_MAGIC, request.number(), ARG_SIZE),
        Direction::Read => request_code_read!(VGA_BALL_MAGIC, request.number(), ARG_SIZE),
    }
}

/// Open handle on the vga_ball device node. Closed on drop.
pub struct IoctlDevice {
    file: File,
    path: PathBuf,
}

impl IoctlDevice {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| VgaError::Open {
                path: path.display().to_string(),
                source,
            })?;
        log::debug!("opened {}", path.display());
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BallDevice for IoctlDevice {
    fn exchange(&mut self, request: Request, block: &mut ControlBlock) -> io::Result<()> {
        let fd = self.file.as_raw_fd();
        let code = request_code(request);
        // SAFETY: `block` is an exclusively borrowed, fully initialised ControlBlock
        // that outlives the call; the driver copies at most size_of::<ControlBlock>() bytes.
        let res = unsafe { nix::libc::ioctl(fd, code, block as *mut ControlBlock) };
        Errno::result(res).map(drop).map_err(io::Error::from)
    }
}

impl Drop for IoctlDevice {
    fn drop(&mut self) {
        log::debug!("closing {}", self.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_carry_magic_and_number() {
        for r in Request::ALL {
            let code = request_code(r) as u64;
            assert_eq!(code & 0xFF, r.number() as u64, "{r}");
            assert_eq!((code >> 8) & 0xFF, VGA_BALL_MAGIC as u64, "{r}");
        }
    }

    // _IOW/_IOR('q', nr, vga_ball_arg_t *) with an 8-byte pointer.
    #[cfg(target_pointer_width = "64")]
    #[test]
    fn codes_match_driver_header() {
        assert_eq!(request_code(Request::WriteBackground) as u64, 0x4008_7101);
        assert_eq!(request_code(Request::ReadBackground) as u64, 0x8008_7102);
        assert_eq!(request_code(Request::WritePosition) as u64, 0x4008_7103);
        assert_eq!(request_code(Request::ReadPosition) as u64, 0x8008_7104);
    }

    #[test]
    fn read_and_write_codes_differ() {
        assert_ne!(
            request_code(Request::ReadBackground),
            request_code(Request::WriteBackground)
        );
        assert_ne!(
            request_code(Request::ReadPosition),
            request_code(Request::WritePosition)
        );
    }

    #[test]
    fn open_failure_names_the_path() {
        let err = match IoctlDevice::open("/nonexistent/vga_ball") {
            Err(e) => e,
            Ok(_) => panic!("opened a path that should not exist"),
        };
        assert!(err.to_string().contains("/nonexistent/vga_ball"));
    }
}
