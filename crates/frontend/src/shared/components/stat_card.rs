use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Good,
    Bad,
}

impl StatTone {
    /// Good for positive, bad for negative amounts
    pub fn by_sign(value: f64) -> Self {
        if value > 0.0 {
            StatTone::Good
        } else if value < 0.0 {
            StatTone::Bad
        } else {
            StatTone::Neutral
        }
    }

    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Good => "stat-card stat-card--success",
            StatTone::Bad => "stat-card stat-card--error",
        }
    }
}

/// One figure of the home dashboard
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    icon_name: &'static str,
    /// Already formatted; `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(into, optional)] tone: Signal<Option<StatTone>>,
) -> impl IntoView {
    let class = move || tone.get().unwrap_or(StatTone::Neutral).class();

    view! {
        <div class=class>
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">
                {move || value.get().unwrap_or_else(|| "…".to_string())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_by_sign() {
        assert_eq!(StatTone::by_sign(10.0), StatTone::Good);
        assert_eq!(StatTone::by_sign(-0.5), StatTone::Bad);
        assert_eq!(StatTone::by_sign(0.0), StatTone::Neutral);
    }
}
