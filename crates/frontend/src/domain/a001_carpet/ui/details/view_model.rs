use contracts::domain::a001_carpet::aggregate::{Carpet, CarpetDirection, CarpetDto, CarpetSource};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_carpet::api;
use crate::shared::forms::{amount_input, optional_text, parse_amount};

#[derive(Clone, Copy)]
pub struct CarpetDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub direction: CarpetDirection,
    /// Display name of the chosen source, empty when none
    pub source: RwSignal<String>,
    pub description: RwSignal<String>,
    pub quality: RwSignal<String>,
    pub length: RwSignal<String>,
    pub width: RwSignal<String>,
    pub rate: RwSignal<String>,
    pub weight: RwSignal<String>,
    pub degree: RwSignal<String>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CarpetDetailsVm {
    pub fn new(direction: CarpetDirection, initial: Option<CarpetDto>) -> Self {
        let dto = initial.unwrap_or_else(|| CarpetDto::empty(direction));
        Self {
            id: RwSignal::new(dto.id),
            direction,
            source: RwSignal::new(
                dto.source
                    .map(|s| s.display_name().to_string())
                    .unwrap_or_default(),
            ),
            description: RwSignal::new(dto.description),
            quality: RwSignal::new(dto.quality),
            length: RwSignal::new(amount_input(dto.length)),
            width: RwSignal::new(amount_input(dto.width)),
            rate: RwSignal::new(amount_input(dto.rate)),
            weight: RwSignal::new(dto.weight),
            degree: RwSignal::new(dto.degree.unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// `length * width * rate` of the typed values
    pub fn price_preview(&self) -> Option<f64> {
        let length = parse_amount("", &self.length.get()).ok()?;
        let width = parse_amount("", &self.width.get()).ok()?;
        let rate = parse_amount("", &self.rate.get()).ok()?;
        Some(length * width * rate)
    }

    pub fn build_dto(&self) -> Result<CarpetDto, String> {
        let dto = CarpetDto {
            id: self.id.get_untracked(),
            direction: self.direction,
            source: CarpetSource::from_display_name(&self.source.get_untracked()),
            description: self.description.get_untracked().trim().to_string(),
            quality: self.quality.get_untracked().trim().to_string(),
            length: parse_amount("طول", &self.length.get_untracked())?,
            width: parse_amount("عرض", &self.width.get_untracked())?,
            rate: parse_amount("نرخ", &self.rate.get_untracked())?,
            weight: self.weight.get_untracked().trim().to_string(),
            degree: optional_text(&self.degree.get_untracked()),
        };
        Carpet::new_for_insert(&dto)?.validate()?;
        Ok(dto)
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.build_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let this = *self;
        this.error.set(None);
        this.saving.set(true);
        spawn_local(async move {
            let result = api::save(&dto).await;
            this.saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}
