// src/paths.rs
//! URL construction. Pure template substitution; nothing here touches shared state.

use crate::config::consts::*;

/// `http://<world>.<site_root>/yoweb/`
pub fn base_url(site_root: &str, world: &str) -> String {
    BASE_URL_TMPL.replace("{site}", site_root).replace("{world}", world)
}

pub fn pirate_url(base: &str, name: &str) -> String {
    join!(base, &PIRATE_PATH_TMPL.replace("{key}", name))
}

pub fn crew_url(base: &str, crew_id: u64) -> String {
    join!(base, &CREW_PATH_TMPL.replace("{key}", &crew_id.to_string()))
}

pub fn flag_url(base: &str, flag_id: u64) -> String {
    join!(base, &FLAG_PATH_TMPL.replace("{key}", &flag_id.to_string()))
}

pub fn tax_rates_url(base: &str) -> String {
    join!(base, TAX_RATES_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_match_live_site_exactly() {
        let base = base_url("puzzlepirates.com", "emerald");
        assert_eq!(base, "http://emerald.puzzlepirates.com/yoweb/");
        assert_eq!(
            pirate_url(&base, "Jackdaw"),
            "http://emerald.puzzlepirates.com/yoweb/pirate.wm?classic=$classic&target=Jackdaw"
        );
        assert_eq!(
            crew_url(&base, 5001234),
            "http://emerald.puzzlepirates.com/yoweb/crew/info.wm?crewid=5001234&classic=false"
        );
        assert_eq!(
            flag_url(&base, 10007),
            "http://emerald.puzzlepirates.com/yoweb/flag/info.wm?flagid=10007&classic=false"
        );
        assert_eq!(tax_rates_url(&base), "http://emerald.puzzlepirates.com/yoweb/econ/taxrates.wm");
    }
}
