use scrape_race::config::{BLOCKS_VAR, GameConfig, SEED_VAR};

fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn defaults_describe_the_regular_game() {
    let config = GameConfig::default();
    assert_eq!(config.room.block_count, 300);
    assert_eq!(config.room.block_edge, 0.2);
    assert_eq!(config.lives, 3);
    assert_eq!(config.clicks, 20);
    assert_eq!(config.seed, None);
}

#[test]
fn no_variables_keep_defaults() {
    let config = GameConfig::default().with_overrides(|_| None);
    assert_eq!(config, GameConfig::default());
}

#[test]
fn overrides_are_applied() {
    let config =
        GameConfig::default().with_overrides(lookup(&[(SEED_VAR, "42"), (BLOCKS_VAR, " 12 ")]));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.room.block_count, 12);
}

#[test]
fn invalid_values_are_ignored() {
    let config =
        GameConfig::default().with_overrides(lookup(&[(SEED_VAR, "soon"), (BLOCKS_VAR, "-3")]));
    assert_eq!(config, GameConfig::default());
}
