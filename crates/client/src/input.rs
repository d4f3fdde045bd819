//! String-to-typed-input marshalling.
//!
//! The only string parsing in the workspace happens here: form text is
//! turned into the core's typed inputs, and anything the core would have
//! to guess about is rejected up front as an
//! [`InvalidInput`](hoard_core::InvalidInput). The core itself never sees
//! a string.

use std::str::FromStr;

use hoard_core::{
    AreaDamage, AreaEffect, GroupSave, Hoard, InvalidInput, SaveMode, Shape, SizeCategory,
};

use crate::state::{FormState, add_field, resolve_field};

/// Parse the add-hoard form into a new [`Hoard`].
pub fn parse_hoard(form: &FormState) -> Result<Hoard, InvalidInput> {
    let name = form.value(add_field::NAME).trim();
    let count = parse_number::<u32>(form.value(add_field::COUNT), "count")?;
    let size = parse_size(form.value(add_field::SIZE));
    let hp_per = parse_number::<u32>(form.value(add_field::HP_PER), "HP per creature")?;

    Hoard::new(name, count, size, hp_per)
}

/// Parse the resolve-damage form into an [`AreaDamage`] request.
pub fn parse_attack(form: &FormState) -> Result<AreaDamage, InvalidInput> {
    let base_damage = parse_number::<u32>(form.value(resolve_field::BASE_DAMAGE), "base damage")?;
    let shape = parse_shape(form.value(resolve_field::SHAPE))?;
    let size_ft = parse_number::<u32>(form.value(resolve_field::SPELL_SIZE), "spell size")?;
    let mode = parse_save_mode(form.value(resolve_field::SAVE_MODE))?;
    let sections = parse_number::<u8>(form.value(resolve_field::SECTIONS), "sections saved")?;

    Ok(AreaDamage::new(
        base_damage,
        AreaEffect::new(shape, size_ft),
        GroupSave::new(mode, sections),
    ))
}

/// Case-insensitive shape lookup. Unknown text is a hard error: defaulting
/// an AoE shape has no tabletop meaning.
pub fn parse_shape(text: &str) -> Result<Shape, InvalidInput> {
    let text = text.trim();
    Shape::from_str(text).map_err(|_| InvalidInput::UnknownShape(text.to_string()))
}

/// Case-insensitive size lookup with the permissive fallback: unrecognized
/// size text maps to [`SizeCategory::Medium`] (multiplier 1).
pub fn parse_size(text: &str) -> SizeCategory {
    let text = text.trim();
    SizeCategory::from_str(text).unwrap_or_else(|_| {
        tracing::warn!(size = text, "unrecognized size category, using Medium");
        SizeCategory::default()
    })
}

/// Save behavior selection: `half` or `none` (full variant names are also
/// accepted). Anything else means no valid selection was made.
pub fn parse_save_mode(text: &str) -> Result<SaveMode, InvalidInput> {
    let text = text.trim();
    match text.to_ascii_lowercase().as_str() {
        "half" => Ok(SaveMode::HalfOnSave),
        "none" => Ok(SaveMode::NoneOnSave),
        _ => SaveMode::from_str(text).map_err(|_| InvalidInput::AmbiguousSaveMode),
    }
}

fn parse_number<T>(text: &str, field: &'static str) -> Result<T, InvalidInput>
where
    T: FromStr,
{
    text.trim()
        .parse()
        .map_err(|_| InvalidInput::MalformedNumber { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mut form: FormState, values: &[&str]) -> FormState {
        for (field, value) in form.fields.iter_mut().zip(values) {
            field.value = (*value).to_string();
        }
        form
    }

    #[test]
    fn add_form_builds_a_hoard() {
        let form = filled(FormState::add_hoard(), &["Goblin", "5", "small", "7"]);
        let hoard = parse_hoard(&form).unwrap();

        assert_eq!(hoard.name(), "Goblin");
        assert_eq!(hoard.count(), 5);
        assert_eq!(hoard.size(), SizeCategory::Small);
        assert_eq!(hoard.total_hp(), 35);
    }

    #[test]
    fn add_form_surfaces_core_validation() {
        let form = filled(FormState::add_hoard(), &["Goblin", "0", "Small", "7"]);
        assert_eq!(parse_hoard(&form), Err(InvalidInput::NonPositiveCount));
    }

    #[test]
    fn malformed_count_is_rejected_with_field_name() {
        let form = filled(FormState::add_hoard(), &["Goblin", "many", "Small", "7"]);
        assert_eq!(
            parse_hoard(&form),
            Err(InvalidInput::MalformedNumber { field: "count" })
        );
    }

    #[test]
    fn unknown_size_falls_back_to_medium() {
        assert_eq!(parse_size("Colossal"), SizeCategory::Medium);
        assert_eq!(parse_size("  huge "), SizeCategory::Huge);
    }

    #[test]
    fn resolve_form_builds_a_request() {
        let form = filled(
            FormState::resolve_damage(),
            &["40", "cube", "30", "none", "0"],
        );
        let attack = parse_attack(&form).unwrap();

        assert_eq!(attack.base_damage, 40);
        assert_eq!(attack.area, AreaEffect::new(Shape::Cube, 30));
        assert_eq!(attack.save, GroupSave::new(SaveMode::NoneOnSave, 0));
    }

    #[test]
    fn unknown_shape_is_a_hard_error() {
        assert_eq!(
            parse_shape("Triangle"),
            Err(InvalidInput::UnknownShape("Triangle".to_string()))
        );
    }

    #[test]
    fn save_mode_requires_a_valid_selection() {
        assert_eq!(parse_save_mode("half"), Ok(SaveMode::HalfOnSave));
        assert_eq!(parse_save_mode("NONE"), Ok(SaveMode::NoneOnSave));
        assert_eq!(parse_save_mode("HalfOnSave"), Ok(SaveMode::HalfOnSave));
        assert_eq!(parse_save_mode("both"), Err(InvalidInput::AmbiguousSaveMode));
        assert_eq!(parse_save_mode(""), Err(InvalidInput::AmbiguousSaveMode));
    }
}
