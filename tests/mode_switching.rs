//! Color Mode Switching Tests
//!
//! Mode changes through the engine, including concurrent readers.

use std::sync::Arc;
use std::thread;
use stylekit::{EngineError, ModeError, Primitive, Props, StyleConfig, StyleEngine};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn body_color(engine: &StyleEngine) -> Option<String> {
    engine.style(Primitive::Text, &Props::new()).get("color", 0)
}

/// Switching away and back restores every resolved value
#[test]
fn test_mode_round_trip() {
    init_tracing();
    let engine = StyleEngine::new().unwrap();
    let original = body_color(&engine);
    let original_css = engine.global_styles();

    for mode in ["dark", "cyan", "gray", "book", "magenta"] {
        engine.set_mode(mode).unwrap();
        assert_ne!(body_color(&engine), original, "{} kept the base body color", mode);

        engine.set_mode("light").unwrap();
        assert_eq!(body_color(&engine), original);
        assert_eq!(engine.global_styles(), original_css);
    }
}

/// A rejected switch leaves resolution exactly as it was
#[test]
fn test_unknown_mode_rejected() {
    init_tracing();
    let engine = StyleEngine::new().unwrap();
    engine.set_mode("gray").unwrap();
    let before = engine.style(Primitive::Button, &Props::new());

    let err = engine.set_mode("sepia").unwrap_err();
    assert!(matches!(err, EngineError::Mode(ModeError::UnknownMode(ref name)) if name == "sepia"));
    assert_eq!(engine.mode_name(), "gray");
    assert_eq!(engine.style(Primitive::Button, &Props::new()), before);
}

/// Element styles follow the active palette
#[test]
fn test_global_styles_follow_mode() {
    init_tracing();
    let engine = StyleEngine::new().unwrap();
    assert!(engine.global_styles().contains("color: #00f;"));

    engine.set_mode("book").unwrap();
    let css = engine.global_styles();
    assert!(css.contains("color: #c30;"));
    assert!(!css.contains("color: #00f;"));
}

/// Cycling visits every declared mode once and wraps to the base
#[test]
fn test_cycle_through_modes() {
    init_tracing();
    let engine = StyleEngine::new().unwrap();
    let mut seen = vec![engine.mode_name()];
    for _ in 0..5 {
        seen.push(engine.cycle_mode().unwrap());
    }
    assert_eq!(seen, vec!["light", "dark", "cyan", "gray", "book", "magenta"]);
    assert_eq!(engine.cycle_mode().unwrap(), "light");
}

/// Configured initial mode is active from the start
#[test]
fn test_configured_initial_mode() {
    init_tracing();
    let engine = StyleEngine::from_config(&StyleConfig::default().with_initial_color_mode("cyan")).unwrap();
    assert_eq!(engine.mode_name(), "cyan");
    assert_eq!(body_color(&engine).as_deref(), Some("#023"));

    engine.modes().reset().unwrap();
    assert_eq!(engine.mode_name(), "cyan");
}

/// Readers resolving while another thread switches always see a whole palette
#[test]
fn test_concurrent_switch_and_resolve() {
    init_tracing();
    let engine = Arc::new(StyleEngine::new().unwrap());
    let theme = Arc::clone(engine.theme());

    let writer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for _ in 0..60 {
                engine.cycle_mode().unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let theme = Arc::clone(&theme);
            thread::spawn(move || {
                for _ in 0..60 {
                    let active = engine.modes().current();
                    let palette = theme.palette(&active.name).unwrap();
                    assert_eq!(active.palette, palette);

                    let color = active.color("body").map(str::to_string);
                    assert!(color.is_some());
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(engine.mode_name(), "light");
}
