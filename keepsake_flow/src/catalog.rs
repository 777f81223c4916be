// Copyright 2026 the Keepsake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static choice lists offered by the setup steps.

/// A party location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Stable identifier submitted by the form.
    pub id: &'static str,
    /// Korean display name.
    pub name_ko: &'static str,
    /// English name, used when composing prompts.
    pub name_en: &'static str,
}

/// A country whose culture flavors the party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Country {
    /// Two-letter identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// "Happy birthday" in the local language.
    pub greeting: &'static str,
}

/// A narration language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Language {
    /// BCP 47 language tag.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Endonym shown on the selection card.
    pub label: &'static str,
}

/// Locations offered by the profile form.
pub const LOCATIONS: &[Location] = &[
    Location { id: "home", name_ko: "아늑한 집", name_en: "cozy home" },
    Location { id: "beach", name_ko: "햇살 가득 해변", name_en: "sunny beach" },
    Location { id: "club", name_ko: "화려한 클럽", name_en: "glamorous club" },
    Location { id: "restaurant", name_ko: "고급 레스토랑", name_en: "fine dining restaurant" },
    Location { id: "rooftop", name_ko: "도심 옥상 파티", name_en: "city rooftop" },
    Location { id: "camping", name_ko: "숲속 캠핑장", name_en: "forest campsite" },
    Location { id: "amusement", name_ko: "놀이공원", name_en: "amusement park" },
    Location { id: "space", name_ko: "우주 정거장", name_en: "space station" },
    Location { id: "underwater", name_ko: "수중 호텔", name_en: "underwater hotel" },
    Location { id: "school", name_ko: "학교 교실", name_en: "school classroom" },
];

/// Countries offered by the country step.
pub const COUNTRIES: &[Country] = &[
    Country { id: "KR", name: "대한민국 (Korea)", greeting: "생일 축하해" },
    Country { id: "US", name: "미국 (USA)", greeting: "Happy Birthday" },
    Country { id: "JP", name: "일본 (Japan)", greeting: "お誕生日おめでとう" },
    Country { id: "CN", name: "중국 (China)", greeting: "生日快乐" },
    Country { id: "IN", name: "인도 (India)", greeting: "जन्मदिन मुबारक" },
    Country { id: "UK", name: "영국 (UK)", greeting: "Happy Birthday" },
    Country { id: "FR", name: "프랑스 (France)", greeting: "Joyeux Anniversaire" },
    Country { id: "BR", name: "브라질 (Brazil)", greeting: "Feliz Aniversário" },
];

/// Languages offered by the language step.
pub const LANGUAGES: &[Language] = &[
    Language { id: "ko-KR", name: "한국어 (Korean)", label: "한국어" },
    Language { id: "en-US", name: "영어 (English)", label: "English" },
    Language { id: "ja-JP", name: "일본어 (Japanese)", label: "日本語" },
    Language { id: "zh-CN", name: "중국어 (Chinese)", label: "中文" },
    Language { id: "es-ES", name: "스페인어 (Spanish)", label: "Español" },
    Language { id: "fr-FR", name: "프랑스어 (French)", label: "Français" },
];

/// Food presets offered by the profile form.
pub const FOODS: &[&str] = &[
    "피자 & 치킨",
    "BBQ 파티",
    "고급 스시",
    "디저트 & 도넛",
    "타코 & 멕시칸",
    "한식 잔칫상",
    "딤섬 & 베이징덕",
    "카레 & 난",
];

/// Mood presets offered by the profile form.
pub const VIBES: &[&str] = &[
    "활기찬 (Energetic)",
    "로맨틱한 (Romantic)",
    "차분한 (Chill)",
    "신비로운 (Mysterious)",
    "광란의 (Chaotic)",
];

/// Looks up a location by id.
#[must_use]
pub fn location(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|l| l.id == id)
}

/// Looks up a country by id.
#[must_use]
pub fn country(id: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.id == id)
}

/// Looks up a language by id.
#[must_use]
pub fn language(id: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in LOCATIONS.iter().enumerate() {
            assert!(LOCATIONS[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
        for (i, a) in COUNTRIES.iter().enumerate() {
            assert!(COUNTRIES[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
        for (i, a) in LANGUAGES.iter().enumerate() {
            assert!(LANGUAGES[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(location("beach").map(|l| l.name_en), Some("sunny beach"));
        assert_eq!(country("FR").map(|c| c.greeting), Some("Joyeux Anniversaire"));
        assert_eq!(language("ja-JP").map(|l| l.label), Some("日本語"));
        assert!(location("moon").is_none());
        assert!(country("kr").is_none());
    }
}
