//! Select boxes for solar months and building floors.
//!
//! Both bind to a `RwSignal<String>` holding the number, the way every
//! other form field of the pages is a string signal.

use contracts::enums::{Floor, SolarMonth};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MonthSelect(value: RwSignal<String>) -> impl IntoView {
    view! {
        <Select value=value>
            {SolarMonth::all().into_iter().map(|m| view! {
                <option value=m.number().to_string()>{m.display_name()}</option>
            }).collect_view()}
        </Select>
    }
}

#[component]
pub fn FloorSelect(value: RwSignal<String>) -> impl IntoView {
    view! {
        <Select value=value>
            {Floor::all().into_iter().map(|f| view! {
                <option value=f.number().to_string()>{f.display_name()}</option>
            }).collect_view()}
        </Select>
    }
}

/// Dari month name for a stored month number
pub fn month_name(month: u8) -> &'static str {
    SolarMonth::from_number(month)
        .map(|m| m.display_name())
        .unwrap_or("-")
}

/// Dari floor name for a stored floor number
pub fn floor_name(floor: u8) -> &'static str {
    Floor::from_number(floor)
        .map(|f| f.display_name())
        .unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(month_name(1), "حمل");
        assert_eq!(month_name(12), "حوت");
        assert_eq!(month_name(13), "-");
        assert_eq!(floor_name(0), "-");
    }
}
