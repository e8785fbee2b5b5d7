use manabase_filter::{
    Category, CookieFilter, FilterConfig, FilterState, FilterUi, RawFilters, RuleBuffer,
    StyleInjector, category::categories, checkbox_id, hidden_rule,
};

fn page_config() -> FilterConfig {
    FilterConfig {
        default_hidden: categories(["silver-border"]),
        default_shown: categories(["lands", "rocks", "dorks", "ramp"]),
        element_scope: String::new(),
        ..FilterConfig::default()
    }
}

fn load(query: &str, cookie_header: &str) -> (FilterState, RuleBuffer) {
    let config = page_config();
    let cookie = CookieFilter::from_cookie_header_lossy(cookie_header, &config.cookie_name);
    let state = FilterState::new(config, RawFilters::collect(cookie, query));
    let mut sheet = RuleBuffer::new();
    StyleInjector::new(state.config()).apply(&state, &mut sheet);
    (state, sheet)
}

#[test]
fn showing_silver_border_injects_no_rule_for_it() {
    let (state, sheet) = load("?show=silver-border", "");
    let silver = Category::from("silver-border");
    assert!(!state.is_hidden(&silver));
    assert!(state.is_shown(&silver));
    assert!(sheet.rules().is_empty());
}

#[test]
fn hiding_lands_injects_rule_and_unchecks_box() {
    let (state, sheet) = load("?hide=lands", "");
    assert!(sheet.contains("[data-mtg-lands] { display: none !important; }"));
    assert!(sheet.contains(&hidden_rule("[data-mtg-silver-border]")));
    assert_eq!(sheet.rules().len(), 2);

    let lands = Category::from("lands");
    let states = FilterUi::checkbox_states(&state, std::slice::from_ref(&lands));
    assert_eq!(states, vec![(lands, false)]);
}

#[test]
fn explicit_hide_of_default_hidden_leaves_no_override() {
    let (state, sheet) = load("?show=silver-border&hide=silver-border", "");
    assert!(state.explicit_show().is_empty());
    assert!(state.explicit_hide().is_empty());
    assert!(sheet.contains(&hidden_rule("[data-mtg-silver-border]")));
}

#[test]
fn explicit_show_of_default_shown_leaves_no_override() {
    let (state, sheet) = load("?hide=ramp&show=ramp", "");
    assert!(state.explicit_show().is_empty());
    assert!(state.explicit_hide().is_empty());
    assert!(!sheet.contains(&hidden_rule("[data-mtg-ramp]")));
}

#[test]
fn cookie_and_query_both_contribute() {
    let cookie = CookieFilter {
        show: categories(["silver-border"]),
        hide: Vec::new(),
    };
    let header = format!("session=abc; filter={}", cookie.to_cookie_value().unwrap());
    let (state, sheet) = load("hide=dorks", &header);
    assert_eq!(state.explicit_show(), categories(["silver-border"]).as_slice());
    assert_eq!(state.explicit_hide(), categories(["dorks"]).as_slice());
    assert_eq!(sheet.rules(), [hidden_rule("[data-mtg-dorks]")]);
}

#[test]
fn malformed_cookie_is_ignored() {
    let (state, sheet) = load("", "filter=%7Bnot json");
    assert!(state.explicit_show().is_empty());
    assert!(state.explicit_hide().is_empty());
    assert_eq!(sheet.rules(), [hidden_rule("[data-mtg-silver-border]")]);
}

#[test]
fn unknown_categories_are_inert() {
    let (state, sheet) = load("show=nonsense&hide=", "");
    assert_eq!(state.explicit_show(), categories(["nonsense"]).as_slice());
    assert_eq!(sheet.rules(), [hidden_rule("[data-mtg-silver-border]")]);
}

#[test]
fn reapplying_unchanged_state_is_idempotent() {
    let (state, mut sheet) = load("hide=rocks&hide=rocks&hide=dorks", "");
    let first = sheet.clone();
    let injector = StyleInjector::new(state.config());
    injector.apply(&state, &mut sheet);
    injector.apply(&state, &mut sheet);
    assert_eq!(sheet, first);
    assert_eq!(sheet.rules().len(), 3);
}

#[test]
fn checkbox_toggles_round_trip() {
    let (mut state, mut sheet) = load("hide=rocks", "");
    let before = state.clone();
    let rules_before = sheet.clone();

    let rocks = checkbox_id(state.config(), &"rocks".into());
    assert!(FilterUi::on_change(&mut state, &rocks, true, &mut sheet));
    assert!(state.explicit_hide().is_empty());
    assert!(FilterUi::on_change(&mut state, &rocks, false, &mut sheet));
    assert_eq!(state, before);
    assert_eq!(sheet, rules_before);

    let silver = checkbox_id(state.config(), &"silver-border".into());
    assert!(FilterUi::on_change(&mut state, &silver, true, &mut sheet));
    assert!(!sheet.contains(&hidden_rule("[data-mtg-silver-border]")));
    assert!(FilterUi::on_change(&mut state, &silver, false, &mut sheet));
    assert_eq!(state.explicit_show(), before.explicit_show());
    assert_eq!(sheet, rules_before);
}

#[test]
fn class_selectors_follow_config() {
    let config = FilterConfig {
        selector_style: manabase_filter::SelectorStyle::Class,
        ..page_config()
    };
    let state = FilterState::new(config, RawFilters::from_query("hide=lands"));
    let rules = StyleInjector::new(state.config()).rules(&state);
    assert_eq!(
        rules,
        vec![
            hidden_rule(".mtg-filter-silver-border"),
            hidden_rule(".mtg-filter-lands"),
        ]
    );
}
