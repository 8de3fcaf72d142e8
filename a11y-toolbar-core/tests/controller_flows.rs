mod common;

use a11y_toolbar_core::constants::{CLASS_DARK_MODE, CLASS_HIGH_CONTRAST};
use common::{FakePage, ManualTimers, controller_on};

#[test]
fn font_size_stays_within_bounds_for_any_delta_sequence() {
    let page = FakePage::with_body_font(16.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    let deltas = [0.5, 3.0, 7.5, 40.0, -0.5, -100.0, 2.25, -1.0, 13.0, 0.0, -2.5];
    for (round, delta) in deltas.iter().cycle().take(200).enumerate() {
        ctrl.adjust_font(*delta * ((round % 3) as f64 + 1.0));
        let px = ctrl.state().font.current_px();
        assert!((12.0..=28.0).contains(&px), "{px} escaped bounds");
    }
}

#[test]
fn half_step_from_sixteen_pixels() {
    let page = FakePage::with_body_font(16.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    ctrl.adjust_font(0.5);

    assert!((ctrl.state().font.current_px() - 16.5).abs() < f64::EPSILON);
    let log = page.log();
    let css = log.style.as_deref().unwrap_or_default();
    assert!(css.contains("html { font-size: 103.125% !important; }"));
    assert!(css.contains("body { font-size: 16.5px !important; }"));
    assert!(css.contains("div { font-size: calc(1.03125em * var(--tamanho-original-div, 1em)) !important; }"));
    assert_eq!(log.toast.as_deref(), Some("Fonte: 17px"));
}

#[test]
fn step_helpers_use_configured_increment() {
    let page = FakePage::with_body_font(16.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    ctrl.increase_font();
    ctrl.increase_font();
    ctrl.decrease_font();
    assert!((ctrl.state().font.current_px() - 16.5).abs() < f64::EPSILON);
}

#[test]
fn reset_removes_style_and_restores_original() {
    let page = FakePage::with_body_font(18.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    ctrl.adjust_font(4.0);
    assert!(page.log().style.is_some());

    ctrl.reset_font();
    assert!(page.log().style.is_none());
    assert!((ctrl.state().font.current_px() - 18.0).abs() < f64::EPSILON);
    assert!(ctrl.state().font.original_px().is_none());
    assert_eq!(
        page.log().toast.as_deref(),
        Some("Fonte restaurada ao tamanho original")
    );
}

#[test]
fn reset_without_capture_falls_back_to_twelve() {
    let page = FakePage::with_body_font(20.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    ctrl.reset_font();
    assert!((ctrl.state().font.current_px() - 12.0).abs() < f64::EPSILON);
    assert_eq!(
        page.log().cookies.get("acessibilidade_tamanhoFonte").map(String::as_str),
        Some("12")
    );
}

#[test]
fn contrast_and_dark_mode_exclude_each_other() {
    let page = FakePage::with_body_font(16.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);

    let toggles: [fn(&mut common::TestController); 6] = [
        |c| c.toggle_contrast(),
        |c| c.toggle_dark_mode(),
        |c| c.toggle_dark_mode(),
        |c| c.toggle_contrast(),
        |c| c.toggle_dark_mode(),
        |c| c.toggle_contrast(),
    ];
    for toggle in toggles {
        toggle(&mut ctrl);
        let state = ctrl.state();
        assert!(!(state.high_contrast && state.dark_mode));
        let log = page.log();
        assert!(log.body_classes.len() <= 1);
        assert_eq!(
            log.body_classes.contains(CLASS_HIGH_CONTRAST),
            state.high_contrast
        );
        assert_eq!(log.body_classes.contains(CLASS_DARK_MODE), state.dark_mode);
    }
}

#[test]
fn enabling_contrast_over_dark_mode_leaves_only_contrast_css() {
    let page = FakePage::with_body_font(16.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    ctrl.toggle_dark_mode();
    assert!(page.log().style.as_deref().unwrap_or_default().contains("modo-dark"));

    ctrl.toggle_contrast();
    let log = page.log();
    let css = log.style.as_deref().unwrap_or_default();
    assert!(css.contains("body.alto-contraste"));
    assert!(!css.contains("modo-dark"));
    assert!(!css.contains("html {"));
    assert_eq!(log.toast.as_deref(), Some("Alto contraste ativado"));
    assert_eq!(
        log.cookies.get("acessibilidade_modoDark").map(String::as_str),
        Some("false")
    );
}

#[test]
fn mode_toggle_writes_only_mode_css_and_keeps_font_state() {
    let page = FakePage::with_body_font(16.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    ctrl.adjust_font(2.0);
    ctrl.toggle_dark_mode();
    let css = page.log().style.clone().unwrap_or_default();
    assert!(css.contains("body.modo-dark"));
    assert!(!css.contains("html {"));
    assert!((ctrl.state().font.current_px() - 18.0).abs() < f64::EPSILON);
    assert_eq!(
        page.log().cookies.get("acessibilidade_tamanhoFonte").map(String::as_str),
        Some("18")
    );

    ctrl.adjust_font(0.5);
    let css = page.log().style.clone().unwrap_or_default();
    assert!(css.contains("body { font-size: 18.5px !important; }"));
    assert!(css.contains("body.modo-dark"));
}

#[test]
fn contrast_over_restored_dark_mode_leaves_only_contrast_css() {
    let page = FakePage::with_body_font(16.0);
    {
        let mut log = page.log_mut();
        log.cookies
            .insert("acessibilidade_tamanhoFonte".into(), "16".into());
        log.cookies
            .insert("acessibilidade_altoContraste".into(), "false".into());
        log.cookies.insert("acessibilidade_modoDark".into(), "true".into());
    }
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    assert!(ctrl.initialize());
    assert!(page.log().style.as_deref().unwrap_or_default().contains("html {"));

    ctrl.toggle_contrast();
    let log = page.log();
    let css = log.style.as_deref().unwrap_or_default();
    assert!(css.contains("body.alto-contraste"));
    assert!(!css.contains("modo-dark"));
    assert!(!css.contains("html {"));
}

#[test]
fn restore_clamps_captured_size_without_stored_font() {
    let page = FakePage::with_body_font(10.0);
    page.log_mut()
        .cookies
        .insert("acessibilidade_altoContraste".into(), "true".into());
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    assert!(ctrl.initialize());

    let px = ctrl.state().font.current_px();
    assert!((12.0..=28.0).contains(&px), "{px} escaped bounds");
    let log = page.log();
    let css = log.style.as_deref().unwrap_or_default();
    assert!(css.contains("body { font-size: 12px !important; }"));
    assert!(!css.contains("10px"));
    assert_eq!(
        log.cookies.get("acessibilidade_tamanhoFonte").map(String::as_str),
        Some("12")
    );
}

#[test]
fn saved_preferences_restore_on_next_page() {
    let page = FakePage::with_body_font(16.0);
    let timers = ManualTimers::default();
    let mut first = controller_on(&page, &timers);
    first.adjust_font(3.5);
    first.toggle_dark_mode();

    let next_page = FakePage::with_body_font(16.0);
    next_page.log_mut().cookies = page.log().cookies.clone();
    let mut second = controller_on(&next_page, &timers);
    assert!(second.initialize());

    assert!((second.state().font.current_px() - 19.5).abs() < f64::EPSILON);
    assert!(second.state().dark_mode);
    assert!(!second.state().high_contrast);
    let log = next_page.log();
    assert!(log.body_classes.contains(CLASS_DARK_MODE));
    let css = log.style.as_deref().unwrap_or_default();
    assert!(css.contains("body { font-size: 19.5px !important; }"));
    assert_eq!(css.matches("body.modo-dark { background-color").count(), 1);
    assert!(log.toast.is_none());
}

#[test]
fn initialize_without_cookies_only_prepares_style() {
    let page = FakePage::with_body_font(15.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    assert!(!ctrl.initialize());
    assert_eq!(page.log().style.as_deref(), Some(""));
    assert!(page.log().cookie_writes.is_empty());
    assert_eq!(ctrl.state().font.original_px(), Some(15.0));
}

#[test]
fn conflicting_stored_modes_keep_contrast() {
    let page = FakePage::with_body_font(16.0);
    {
        let mut log = page.log_mut();
        log.cookies
            .insert("acessibilidade_altoContraste".into(), "true".into());
        log.cookies.insert("acessibilidade_modoDark".into(), "true".into());
        log.cookies
            .insert("acessibilidade_tamanhoFonte".into(), "NaN-ish".into());
    }
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    assert!(ctrl.initialize());
    assert!(ctrl.state().high_contrast);
    assert!(!ctrl.state().dark_mode);
    assert!((ctrl.state().font.current_px() - 16.0).abs() < f64::EPSILON);
    assert_eq!(page.log().body_classes.len(), 1);
}

#[test]
fn persistent_expiry_is_written_when_configured() {
    let page = FakePage::with_body_font(16.0);
    page.log_mut().now_ms = 0.0;
    let timers = ManualTimers::default();
    let config = a11y_toolbar_core::A11yConfig {
        cookie_expiration_days: 1,
        ..a11y_toolbar_core::A11yConfig::default()
    };
    let mut ctrl = a11y_toolbar_core::A11yController::new(
        config,
        a11y_toolbar_core::Messages::default(),
        page.clone(),
        timers.clone(),
    );
    ctrl.toggle_contrast();
    assert!(
        page.log()
            .cookie_writes
            .iter()
            .all(|c| c.contains(";expires=Fri, 02 Jan 1970 00:00:00 GMT;path=/"))
    );
}

#[test]
fn second_toast_restarts_the_fade() {
    let page = FakePage::with_body_font(16.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);

    ctrl.show_feedback("primeira");
    timers.advance(2000);
    ctrl.show_feedback("segunda");
    assert_eq!(timers.pending(), 1);

    timers.advance(2000);
    assert!(page.log().toast_visible);
    assert_eq!(page.log().toast_fades, 0);

    timers.advance(1000);
    assert!(!page.log().toast_visible);
    assert_eq!(page.log().toast_fades, 1);
    assert_eq!(page.log().toast.as_deref(), Some("segunda"));
}

#[test]
fn read_aloud_speaks_once_after_pointer_settles() {
    let page = FakePage::with_body_font(16.0);
    page.log_mut().text_under_pointer = Some("  Bem-vindo ao portal  ".into());
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);

    ctrl.on_pointer_move(10.0, 10.0);
    timers.advance(1000);
    assert!(page.log().spoken.is_empty(), "disabled read-aloud must stay silent");

    ctrl.toggle_read_aloud();
    assert_eq!(page.log().toast.as_deref(), Some("Leitura ativada"));
    for step in 0..5 {
        ctrl.on_pointer_move(f64::from(step), 5.0);
        timers.advance(300);
    }
    assert!(page.log().spoken.is_empty());
    timers.advance(500);
    {
        let log = page.log();
        assert_eq!(
            log.spoken,
            vec![("Bem-vindo ao portal".to_string(), "pt-BR".to_string())]
        );
    }

    ctrl.on_pointer_move(6.0, 5.0);
    timers.advance(800);
    assert_eq!(page.log().spoken.len(), 2, "same text is spoken again");
}

#[test]
fn read_aloud_skips_short_text_and_stops_when_disabled() {
    let page = FakePage::with_body_font(16.0);
    page.log_mut().text_under_pointer = Some(" OK ".into());
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    ctrl.toggle_read_aloud();

    ctrl.on_pointer_move(1.0, 1.0);
    timers.advance(800);
    assert!(page.log().spoken.is_empty());

    page.log_mut().text_under_pointer = Some("Notícias".into());
    ctrl.on_pointer_move(2.0, 2.0);
    ctrl.toggle_read_aloud();
    timers.advance(800);
    assert!(page.log().spoken.is_empty());
    assert_eq!(page.log().speech_cancels, 1);
    assert_eq!(page.log().toast.as_deref(), Some("Leitura desativada"));
}

#[test]
fn missing_speech_api_is_silent() {
    let page = FakePage::with_body_font(16.0);
    {
        let mut log = page.log_mut();
        log.speech_available = false;
        log.text_under_pointer = Some("Contato".into());
    }
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    ctrl.toggle_read_aloud();
    ctrl.on_pointer_move(0.0, 0.0);
    timers.advance(800);
    ctrl.toggle_read_aloud();
    ctrl.read_text("Contato");
    let log = page.log();
    assert!(log.spoken.is_empty());
    assert_eq!(log.speech_cancels, 0);
}

#[test]
fn snapshot_reflects_state() {
    let page = FakePage::with_body_font(16.0);
    let timers = ManualTimers::default();
    let mut ctrl = controller_on(&page, &timers);
    ctrl.adjust_font(1.0);
    ctrl.toggle_contrast();
    let snapshot = ctrl.snapshot();
    assert!((snapshot.font_size_px - 17.0).abs() < f64::EPSILON);
    assert_eq!(snapshot.original_font_size_px, Some(16.0));
    assert!(snapshot.high_contrast);
    let json = serde_json::to_value(&snapshot).unwrap_or_default();
    assert_eq!(json["highContrast"], serde_json::Value::Bool(true));
}
