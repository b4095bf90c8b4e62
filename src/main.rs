use scrape_race::config::GameConfig;

fn main() -> anyhow::Result<()> {
    scrape_race::flow::run(GameConfig::from_env())
}
