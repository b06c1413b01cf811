use dashboard_core::DashboardCity;

/// The human-readable dashboard sentence.
pub fn describe(city: &DashboardCity) -> String {
    format!(
        "{} is in {}.\nToday there are {} degrees and the weather is {}.\nThe main airport is {}.\n",
        city.city, city.country, city.temperature, city.weather, city.airport
    )
}

pub fn to_json(city: &DashboardCity) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(city)?)
}
