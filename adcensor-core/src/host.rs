// File: adcensor-core/src/host.rs

//! `host.rs`
//! Glue between the censor and a game-server plugin host.
//!
//! The host owns every buffer. It calls [`CensorPlugin::on_init`] once at
//! startup, [`CensorPlugin::on_message_sent`] for every outgoing chat line
//! (a NUL-terminated buffer it will reuse afterwards), and
//! [`CensorPlugin::on_info_request`] to read plugin metadata into fixed-size
//! fields it has pre-allocated. Nothing here performs I/O apart from logging.

use anyhow::Result;
use log::{debug, info};

use crate::errors::CensorError;
use crate::policy::CensorFilter;
use crate::verdict::Verdict;

/// Plugin API version this plugin was written against.
pub const PLUGIN_HANDLER_VERSION_MAJOR: u32 = 4;
pub const PLUGIN_HANDLER_VERSION_MINOR: u32 = 0;

pub const FULL_NAME_CAPACITY: usize = 64;
pub const SHORT_DESCRIPTION_CAPACITY: usize = 128;
pub const LONG_DESCRIPTION_CAPACITY: usize = 1024;

pub const PLUGIN_FULL_NAME: &str = "ImplaZa IP Censoring Plugin by Akilaid";
pub const PLUGIN_SHORT_DESCRIPTION: &str =
    "A plugin designed to filter and block unwanted advertisements and spam in the in-game chat.";
pub const PLUGIN_LONG_DESCRIPTION: &str = "ImplaZa IP Censoring Plugin helps maintain a clean and enjoyable gaming environment by preventing server advertisers and spammers from flooding the in-game chat. It automatically detects and censors unwanted messages, ensuring a smoother experience for players.\n\nCopyright (c) 2024 akilaid";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

/// Metadata block pre-allocated by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    pub handler_version: Version,
    pub plugin_version: Version,
    pub full_name: [u8; FULL_NAME_CAPACITY],
    pub short_description: [u8; SHORT_DESCRIPTION_CAPACITY],
    pub long_description: [u8; LONG_DESCRIPTION_CAPACITY],
}

impl Default for PluginInfo {
    fn default() -> Self {
        Self {
            handler_version: Version::default(),
            plugin_version: Version::default(),
            full_name: [0; FULL_NAME_CAPACITY],
            short_description: [0; SHORT_DESCRIPTION_CAPACITY],
            long_description: [0; LONG_DESCRIPTION_CAPACITY],
        }
    }
}

impl PluginInfo {
    pub fn full_name_str(&self) -> String {
        c_field_to_string(&self.full_name)
    }

    pub fn short_description_str(&self) -> String {
        c_field_to_string(&self.short_description)
    }

    pub fn long_description_str(&self) -> String {
        c_field_to_string(&self.long_description)
    }
}

/// Per-message metadata supplied by the host. The censor ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageContext {
    /// Client slot of the sender.
    pub slot: i32,
    /// Delivery mode (all, team, ...).
    pub mode: i32,
    /// Whether the host will show the message.
    pub show: bool,
}

impl Default for MessageContext {
    fn default() -> Self {
        Self { slot: 0, mode: 0, show: true }
    }
}

/// Length of the NUL-terminated string at the start of `buf`, or the whole
/// buffer if it has no terminator.
pub fn c_str_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

fn c_field_to_string(field: &[u8]) -> String {
    String::from_utf8_lossy(&field[..c_str_len(field)]).into_owned()
}

/// Copies a NUL-terminated string into a fixed-size destination.
///
/// At most `dest.len() - 1` bytes of `src` (up to its own terminator) are
/// copied, the rest of `dest` is zeroed, and the result is always
/// terminated. Returns the number of bytes copied.
///
/// A missing destination, a missing source or a zero-capacity destination
/// is a contract violation; the returned error disables the plugin.
pub fn bounded_copy(dest: Option<&mut [u8]>, src: Option<&[u8]>) -> Result<usize, CensorError> {
    let dest = dest.ok_or(CensorError::NullDestination)?;
    let src = src.ok_or(CensorError::NullSource)?;
    if dest.is_empty() {
        return Err(CensorError::InvalidCapacity(dest.len()));
    }

    let copied = c_str_len(src).min(dest.len() - 1);
    dest[..copied].copy_from_slice(&src[..copied]);
    dest[copied..].fill(0);
    Ok(copied)
}

/// The censor as seen by the plugin host.
#[derive(Debug)]
pub struct CensorPlugin {
    filter: CensorFilter,
}

impl CensorPlugin {
    pub fn new(filter: CensorFilter) -> Self {
        Self { filter }
    }

    /// Builds the plugin over the embedded lists.
    pub fn with_default_lists() -> Result<Self> {
        Ok(Self::new(CensorFilter::with_default_lists()?))
    }

    pub fn filter(&self) -> &CensorFilter {
        &self.filter
    }

    /// Startup hook. Safe to call any number of times.
    pub fn on_init(&self) {
        info!("IP and Domain Censor: init complete.");
    }

    /// Chat hook. Censors the message in place; bytes after the terminator
    /// are never read or written.
    pub fn on_message_sent(&self, buffer: &mut [u8], ctx: &mut MessageContext) -> Verdict {
        debug!("on_message_sent: slot={} mode={} show={}", ctx.slot, ctx.mode, ctx.show);
        let len = c_str_len(buffer);
        self.filter.censor_in_place(&mut buffer[..len])
    }

    /// Fills the host's metadata block.
    pub fn on_info_request(&self, info: &mut PluginInfo) -> Result<(), CensorError> {
        info.handler_version = Version {
            major: PLUGIN_HANDLER_VERSION_MAJOR,
            minor: PLUGIN_HANDLER_VERSION_MINOR,
        };
        info.plugin_version = Version { major: 1, minor: 0 };

        bounded_copy(Some(&mut info.full_name[..]), Some(PLUGIN_FULL_NAME.as_bytes()))?;
        bounded_copy(Some(&mut info.short_description[..]), Some(PLUGIN_SHORT_DESCRIPTION.as_bytes()))?;
        bounded_copy(Some(&mut info.long_description[..]), Some(PLUGIN_LONG_DESCRIPTION.as_bytes()))?;
        Ok(())
    }
}
