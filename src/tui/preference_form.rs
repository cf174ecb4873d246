//! 対話式プリファレンスフォーム
//!
//! 5つの質問で希望条件を組み立てる。各質問は単一選択で、
//! 「No preference」を選ぶとその条件は課されない。

use crate::error::{PlantgError, Result};
use crate::preferences::{
    PreferenceSet, SizeClass, APPEAL_CHOICES, RARITY_CHOICES, SUNLIGHT_CHOICES, WATERING_CHOICES,
};
use crate::tui::dialog::{single_select, SelectItem};

/// 条件を課さないことを表すラベル
const NO_PREFERENCE: &str = "No preference";

/// フォームを実行して希望条件を組み立てる
///
/// いずれかの質問でキャンセルするとフォーム全体を中断する。
pub fn run_preference_form() -> Result<PreferenceSet> {
    let sunlight = ask_choice(
        "Choose how much sun your space gets",
        SUNLIGHT_CHOICES,
        Some("Strong Light"),
    )?;
    let watering = ask_choice(
        "How much watering do you want to do?",
        WATERING_CHOICES,
        Some("Water When Half Dry"),
    )?;
    let size = ask_size()?;
    let rarity = ask_choice(
        "How rare would you like your plant to be?",
        RARITY_CHOICES,
        Some("Regular"),
    )?;
    let appeal = ask_choice(
        "What should the plant's best feature be?",
        APPEAL_CHOICES,
        Some("Foliage"),
    )?;

    Ok(PreferenceSet {
        sunlight,
        watering,
        size,
        rarity,
        appeal,
    })
}

/// 1問分の単一選択
fn ask_choice(title: &str, choices: &[&str], default: Option<&str>) -> Result<Option<String>> {
    let mut items = vec![SelectItem::new(NO_PREFERENCE, None)];
    items.extend(choices.iter().map(|choice| {
        SelectItem::new(*choice, Some(choice.to_string())).with_selected(default == Some(*choice))
    }));

    let result = single_select(title, &items).map_err(|e| PlantgError::Tui(e.to_string()))?;
    if result.cancelled {
        return Err(PlantgError::Cancelled);
    }

    Ok(result.selected.flatten())
}

/// サイズの質問（範囲の説明つき）
fn ask_size() -> Result<Option<String>> {
    let mut items = vec![SelectItem::new(NO_PREFERENCE, None)];
    items.extend(SizeClass::all().iter().map(|class| {
        SelectItem::new(class.display_name(), Some(class.as_str().to_string()))
            .with_description(class.range_label())
            .with_selected(*class == SizeClass::Medium)
    }));

    let result = single_select("How Big Do You Want Your Plant to Get?", &items)
        .map_err(|e| PlantgError::Tui(e.to_string()))?;
    if result.cancelled {
        return Err(PlantgError::Cancelled);
    }

    Ok(result.selected.flatten())
}

#[cfg(test)]
mod tests {
    // TUIテストは実際のターミナルが必要なためスキップ
}
