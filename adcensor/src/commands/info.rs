//! `info` command: queries the plugin the way a host would and prints the result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io;

use adcensor_core::{CensorConfig, CensorPlugin, PluginInfo};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

pub fn run_info(plugin: &CensorPlugin, theme: &ThemeMap) -> Result<()> {
    plugin.on_init();

    let mut info = PluginInfo::default();
    plugin
        .on_info_request(&mut info)
        .context("Plugin metadata request failed")?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    output_format::print_plugin_info(
        &info,
        &plugin.filter().detector_names(),
        &mut writer,
        theme,
        supports_color,
    )?;

    let config = CensorConfig::shared_default()?;
    output_format::print_lists(config, &mut writer, theme, supports_color)?;
    Ok(())
}
