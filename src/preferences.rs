//! ユーザーの希望条件（プリファレンス）
//!
//! フォームで入力された希望条件を定義する。未設定のフィールドは
//! 「こだわらない」を意味し、フィルタ条件を課さない。

use clap::ValueEnum;

/// フォームで受け付ける日照の選択肢（lightカラムに対応）
pub const SUNLIGHT_CHOICES: &[&str] = &["Strong Light", "Full Sun"];

/// 水やりの選択肢（waterカラムに対応）
pub const WATERING_CHOICES: &[&str] = &[
    "Must Not Dry Between Waterings",
    "Can Dry Between Waterings",
    "Water When Half Dry",
    "Water Only When Dry",
];

/// レア度の選択肢（availabilityカラムに対応）
pub const RARITY_CHOICES: &[&str] = &[
    "Regular",
    "Seasonal",
    "More or Less Rare",
    "Sporadic",
    "Rare",
];

/// 見どころの選択肢（appealカラムに対応）
pub const APPEAL_CHOICES: &[&str] = &[
    "Flower",
    "Foliage",
    "Style",
    "Color",
    "Trunc",
    "Bearing",
    "Robustness",
];

/// サイズ区分（最大樹高の範囲）
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizeClass {
    /// 1メートル未満
    Small,
    /// 1〜5メートル（両端を含む）
    Medium,
    /// 5メートル超
    Large,
}

impl SizeClass {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }

    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            SizeClass::Small => "Small",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
        }
    }

    /// 範囲の説明文を取得
    pub fn range_label(&self) -> &'static str {
        match self {
            SizeClass::Small => "< 1 meter",
            SizeClass::Medium => "1 - 5 meters",
            SizeClass::Large => "> 5 meters",
        }
    }

    /// 識別子文字列からの変換
    ///
    /// 小文字の完全一致のみ受け付ける。それ以外はNone。
    pub fn parse(value: &str) -> Option<SizeClass> {
        match value {
            "small" => Some(SizeClass::Small),
            "medium" => Some(SizeClass::Medium),
            "large" => Some(SizeClass::Large),
            _ => None,
        }
    }

    /// 樹高（メートル）がこの区分に入るか
    pub fn contains_height(&self, height: f64) -> bool {
        match self {
            SizeClass::Small => height < 1.0,
            SizeClass::Medium => (1.0..=5.0).contains(&height),
            SizeClass::Large => height > 5.0,
        }
    }

    /// 全サイズ区分を取得
    pub fn all() -> &'static [SizeClass] {
        &[SizeClass::Small, SizeClass::Medium, SizeClass::Large]
    }
}

/// ユーザーの希望条件一式
///
/// sizeは文字列のまま保持し、解釈はフィルタ側で行う。
/// 空文字列は未設定と同じ扱い。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceSet {
    pub sunlight: Option<String>,
    pub watering: Option<String>,
    pub size: Option<String>,
    pub rarity: Option<String>,
    pub appeal: Option<String>,
}

impl PreferenceSet {
    /// 条件なしのプリファレンスを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 日照の希望を設定
    pub fn with_sunlight(mut self, value: impl Into<String>) -> Self {
        self.sunlight = Some(value.into());
        self
    }

    /// 水やりの希望を設定
    pub fn with_watering(mut self, value: impl Into<String>) -> Self {
        self.watering = Some(value.into());
        self
    }

    /// サイズの希望を設定
    pub fn with_size(mut self, value: impl Into<String>) -> Self {
        self.size = Some(value.into());
        self
    }

    /// レア度の希望を設定
    pub fn with_rarity(mut self, value: impl Into<String>) -> Self {
        self.rarity = Some(value.into());
        self
    }

    /// 見どころの希望を設定
    pub fn with_appeal(mut self, value: impl Into<String>) -> Self {
        self.appeal = Some(value.into());
        self
    }

    /// 全フィールドが未設定か
    pub fn is_unconstrained(&self) -> bool {
        fn unset(value: &Option<String>) -> bool {
            value.as_deref().map_or(true, str::is_empty)
        }

        unset(&self.sunlight)
            && unset(&self.watering)
            && unset(&self.size)
            && unset(&self.rarity)
            && unset(&self.appeal)
    }
}

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;
