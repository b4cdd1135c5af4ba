// adcensor-core/tests/host_plugin_tests.rs
//! Integration tests for the plugin host glue.

use adcensor_core::host::{
    FULL_NAME_CAPACITY, PLUGIN_FULL_NAME, PLUGIN_HANDLER_VERSION_MAJOR, PLUGIN_LONG_DESCRIPTION,
    PLUGIN_SHORT_DESCRIPTION,
};
use adcensor_core::{bounded_copy, CensorError, CensorPlugin, MessageContext, PluginInfo, Verdict};
use anyhow::Result;
use test_log::test;

fn nul_terminated(message: &str, capacity: usize) -> Vec<u8> {
    let mut buf = vec![0u8; capacity];
    buf[..message.len()].copy_from_slice(message.as_bytes());
    buf
}

#[test]
fn test_on_init_is_repeatable() -> Result<()> {
    let plugin = CensorPlugin::with_default_lists()?;
    plugin.on_init();
    plugin.on_init();

    let mut buf = nul_terminated("gg wp", 16);
    let verdict = plugin.on_message_sent(&mut buf, &mut MessageContext::default());
    assert_eq!(verdict, Verdict::Clean);
    Ok(())
}

#[test]
fn test_on_message_sent_masks_up_to_terminator() -> Result<()> {
    let plugin = CensorPlugin::with_default_lists()?;
    let message = "join 10.1.2.3";
    let mut buf = nul_terminated(message, 32);
    buf[message.len() + 1..].fill(b'#');

    let verdict = plugin.on_message_sent(&mut buf, &mut MessageContext::default());

    assert!(verdict.is_redacted());
    assert!(buf[..message.len()].iter().all(|&b| b == b'*'));
    assert_eq!(buf[message.len()], 0);
    assert!(buf[message.len() + 1..].iter().all(|&b| b == b'#'));
    Ok(())
}

#[test]
fn test_on_message_sent_ignores_text_after_terminator() -> Result<()> {
    let plugin = CensorPlugin::with_default_lists()?;
    let mut buf = b"hello\0192.168.1.1".to_vec();
    let before = buf.clone();

    let verdict = plugin.on_message_sent(&mut buf, &mut MessageContext::default());

    assert_eq!(verdict, Verdict::Clean);
    assert_eq!(buf, before);
    Ok(())
}

#[test]
fn test_on_message_sent_keeps_whitelisted_text() -> Result<()> {
    let plugin = CensorPlugin::with_default_lists()?;
    let message = "play on ImPlaza.LK 1.2.3.4";
    let mut buf = nul_terminated(message, 64);
    let mut ctx = MessageContext { slot: 3, mode: 1, show: true };

    let verdict = plugin.on_message_sent(&mut buf, &mut ctx);

    assert_eq!(verdict, Verdict::Whitelisted);
    assert_eq!(&buf[..message.len()], message.as_bytes());
    assert_eq!(ctx, MessageContext { slot: 3, mode: 1, show: true });
    Ok(())
}

#[test]
fn test_on_info_request_fills_metadata() -> Result<()> {
    let plugin = CensorPlugin::with_default_lists()?;
    let mut info = PluginInfo::default();
    plugin.on_info_request(&mut info)?;

    assert_eq!(info.handler_version.major, PLUGIN_HANDLER_VERSION_MAJOR);
    assert_eq!(info.plugin_version.major, 1);
    assert_eq!(info.full_name_str(), PLUGIN_FULL_NAME);
    assert_eq!(info.full_name[FULL_NAME_CAPACITY - 1], 0);

    assert_eq!(info.short_description_str(), PLUGIN_SHORT_DESCRIPTION);

    assert_eq!(info.long_description_str(), PLUGIN_LONG_DESCRIPTION);
    Ok(())
}

#[test]
fn test_bounded_copy_contract_violations_disable_plugin() {
    let mut empty: [u8; 0] = [];
    let errors = [
        bounded_copy(None, Some(&b"abc"[..])).unwrap_err(),
        bounded_copy(Some(&mut [0u8; 4][..]), None).unwrap_err(),
        bounded_copy(Some(&mut empty[..]), Some(&b"abc"[..])).unwrap_err(),
    ];
    for err in &errors {
        assert!(err.disables_plugin(), "{}", err);
    }
    assert!(matches!(errors[2], CensorError::InvalidCapacity(0)));
    assert_eq!(errors[0].to_string(), "bounded_copy: NULL dest");
}
