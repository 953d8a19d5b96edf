use engine::CountryCode;

use crate::state::AppState;

pub fn show_config(state: &AppState) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&state.config)?);
    Ok(())
}

pub fn list_countries(state: &AppState) {
    for country in CountryCode::ALL {
        println!(
            "{}  {:<8}  {:<36}  {}",
            country,
            country.default_language(),
            country.prefixes().join(", "),
            state.sink.country_file(country).display()
        );
    }
}
