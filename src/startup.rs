//! Startup configuration derived from the parsed argument table.
//!
//! This is the consumer side of the argument core: it maps the recognized
//! flags onto typed options that client bootstrap branches on (window
//! creation, networking endpoints, console availability). The table itself
//! stays agnostic of flag semantics.

use crate::table::ArgumentTable;
use anyhow::{Context, Result, anyhow};
use regex::Regex;
use std::net::Ipv4Addr;

/// Requested display mode from `-vidmode <width,height[,refreshrate]>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    pub width: u32,
    pub height: u32,
    /// Refresh rate in Hz; the driver default applies when omitted.
    pub refresh_rate: Option<u32>,
}

/// Startup behavior switches resolved from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// `-window`: play in windowed mode instead of fullscreen.
    pub windowed: bool,
    /// `-nowinkey`: disable the Windows key while in game.
    pub disable_win_key: bool,
    /// `-novideo` (or `-connect`): skip the intro and exit videos.
    pub skip_videos: bool,
    /// `-console`: enable the in-game console.
    pub console: bool,
    /// `-devmode`: enable all console commands, including cheats.
    pub devmode: bool,
    /// `-debugbox`: show a debug message box on start.
    pub debug_box: bool,
    /// `-help`: print the usage text instead of starting.
    pub show_help: bool,
    /// `-connect <ip:port>`: server endpoint to join on startup, kept verbatim
    /// for the network layer.
    pub connect: Option<String>,
    /// `-password <password>`: password to use with `-connect`.
    pub password: Option<String>,
    /// `-port <port>`: server UDP port.
    pub server_port: Option<u16>,
    /// `-cport <port>`: client UDP port.
    pub client_port: Option<u16>,
    /// `-ip <ip>`: client IPv4 address.
    pub client_ip: Option<Ipv4Addr>,
    /// `-vidmode <width,height[,refreshrate]>`: display mode for windowed play.
    pub video_mode: Option<VideoMode>,
}

impl StartupOptions {
    /// Resolves startup options from the argument table.
    ///
    /// Presence flags cannot fail. A flag that carries a typed value fails
    /// with context when the value is malformed; a valued flag followed by
    /// another flag simply leaves its option unset, the same as the lookup
    /// contract.
    pub fn from_table(table: &ArgumentTable) -> Result<Self> {
        let video_mode = match table.value_of("-vidmode") {
            Some(text) => Some(parse_video_mode(text)?),
            None => None,
        };
        Ok(Self {
            windowed: table.has_flag("-window"),
            disable_win_key: table.has_flag("-nowinkey"),
            // Joining a server skips the intro videos as well.
            skip_videos: table.has_flag("-novideo") || table.has_flag("-connect"),
            console: table.has_flag("-console"),
            devmode: table.has_flag("-devmode"),
            debug_box: table.has_flag("-debugbox"),
            show_help: table.has_flag("-help"),
            connect: table.value_of("-connect").map(str::to_owned),
            password: table.value_of("-password").map(str::to_owned),
            server_port: parse_port(table, "-port")?,
            client_port: parse_port(table, "-cport")?,
            client_ip: parse_client_ip(table)?,
            video_mode,
        })
    }
}

/// Usage text shown for `-help`, enumerating the recognized flags.
pub fn help_text() -> &'static str {
    "Arguments:\n\
     \n\
     -console - enable the console (activate with the tilde key)\n\
     -devmode - enable all commands in the console (incl. cheats)\n\
     -connect <ip:port> - connect to a server at the given endpoint\n\
     -password <password> - password to use with -connect\n\
     -nowinkey - disable the Windows key\n\
     -novideo - disable intro/exit videos\n\
     -window - play in windowed mode\n\
     -vidmode <width,height[,refreshrate]> - display mode for windowed play\n\
     -debugbox - show a debug message box on start (for testing)\n\
     -ip <ip> - sets the client IP\n\
     -cport <port> - sets the client UDP port\n\
     -port <port> - sets the server UDP port\n\
     -help - show this text"
}

fn parse_port(table: &ArgumentTable, flag: &str) -> Result<Option<u16>> {
    match table.value_of(flag) {
        Some(text) => {
            let port = text
                .parse::<u16>()
                .with_context(|| format!("invalid UDP port for {flag}: {text:?}"))?;
            Ok(Some(port))
        }
        None => Ok(None),
    }
}

fn parse_client_ip(table: &ArgumentTable) -> Result<Option<Ipv4Addr>> {
    match table.value_of("-ip") {
        Some(text) => {
            let ip = text
                .parse::<Ipv4Addr>()
                .with_context(|| format!("invalid IPv4 address for -ip: {text:?}"))?;
            Ok(Some(ip))
        }
        None => Ok(None),
    }
}

fn parse_video_mode(text: &str) -> Result<VideoMode> {
    // width,height with an optional refresh rate, all decimal.
    let shape = Regex::new(r"^(\d+),(\d+)(?:,(\d+))?$")?;
    let caps = shape.captures(text).ok_or_else(|| {
        anyhow!("invalid -vidmode value {text:?}, expected width,height[,refreshrate]")
    })?;
    let width = caps[1]
        .parse()
        .with_context(|| format!("-vidmode width out of range: {text:?}"))?;
    let height = caps[2]
        .parse()
        .with_context(|| format!("-vidmode height out of range: {text:?}"))?;
    let refresh_rate = match caps.get(3) {
        Some(rate) => Some(
            rate.as_str()
                .parse()
                .with_context(|| format!("-vidmode refresh rate out of range: {text:?}"))?,
        ),
        None => None,
    };
    Ok(VideoMode {
        width,
        height,
        refresh_rate,
    })
}
