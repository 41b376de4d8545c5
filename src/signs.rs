//! Astrological vocabulary types.
//!
//! The two 12-value taxonomies (solar signs, lunar animals), their group
//! mappings (elements, trines), and the Wu Xing year element. All enums
//! carry a fixed ordering; circular distance and cycle arithmetic elsewhere
//! depend on the declared variant order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// ============================================================================
// SOLAR (WESTERN) SIGNS
// ============================================================================

/// The twelve solar signs in zodiacal order (Aries = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl SolarSign {
    pub const ALL: [SolarSign; 12] = [
        SolarSign::Aries,
        SolarSign::Taurus,
        SolarSign::Gemini,
        SolarSign::Cancer,
        SolarSign::Leo,
        SolarSign::Virgo,
        SolarSign::Libra,
        SolarSign::Scorpio,
        SolarSign::Sagittarius,
        SolarSign::Capricorn,
        SolarSign::Aquarius,
        SolarSign::Pisces,
    ];

    /// Position in the fixed zodiacal ordering (0-11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The classical element for this sign.
    pub fn element(self) -> Element {
        match self {
            SolarSign::Aries | SolarSign::Leo | SolarSign::Sagittarius => Element::Fire,
            SolarSign::Taurus | SolarSign::Virgo | SolarSign::Capricorn => Element::Earth,
            SolarSign::Gemini | SolarSign::Libra | SolarSign::Aquarius => Element::Air,
            SolarSign::Cancer | SolarSign::Scorpio | SolarSign::Pisces => Element::Water,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SolarSign::Aries => "Aries",
            SolarSign::Taurus => "Taurus",
            SolarSign::Gemini => "Gemini",
            SolarSign::Cancer => "Cancer",
            SolarSign::Leo => "Leo",
            SolarSign::Virgo => "Virgo",
            SolarSign::Libra => "Libra",
            SolarSign::Scorpio => "Scorpio",
            SolarSign::Sagittarius => "Sagittarius",
            SolarSign::Capricorn => "Capricorn",
            SolarSign::Aquarius => "Aquarius",
            SolarSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for SolarSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolarSign {
    type Err = EngineError;

    /// Case-insensitive lookup; fails fast on anything outside the 12 signs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        SolarSign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().to_ascii_lowercase() == lower)
            .ok_or_else(|| EngineError::InvalidSolarSign(s.to_string()))
    }
}

/// The four classical elements of the solar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// LUNAR (CHINESE) ANIMALS
// ============================================================================

/// The twelve lunar animals in branch order (Rat = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl LunarAnimal {
    pub const ALL: [LunarAnimal; 12] = [
        LunarAnimal::Rat,
        LunarAnimal::Ox,
        LunarAnimal::Tiger,
        LunarAnimal::Rabbit,
        LunarAnimal::Dragon,
        LunarAnimal::Snake,
        LunarAnimal::Horse,
        LunarAnimal::Goat,
        LunarAnimal::Monkey,
        LunarAnimal::Rooster,
        LunarAnimal::Dog,
        LunarAnimal::Pig,
    ];

    /// Position in the fixed branch ordering (0-11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The San He trine group this animal belongs to.
    pub fn trine(self) -> Trine {
        match self {
            LunarAnimal::Rat | LunarAnimal::Dragon | LunarAnimal::Monkey => Trine::Visionaries,
            LunarAnimal::Ox | LunarAnimal::Snake | LunarAnimal::Rooster => Trine::Strategists,
            LunarAnimal::Tiger | LunarAnimal::Horse | LunarAnimal::Dog => Trine::Adventurers,
            LunarAnimal::Rabbit | LunarAnimal::Goat | LunarAnimal::Pig => Trine::Artists,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LunarAnimal::Rat => "Rat",
            LunarAnimal::Ox => "Ox",
            LunarAnimal::Tiger => "Tiger",
            LunarAnimal::Rabbit => "Rabbit",
            LunarAnimal::Dragon => "Dragon",
            LunarAnimal::Snake => "Snake",
            LunarAnimal::Horse => "Horse",
            LunarAnimal::Goat => "Goat",
            LunarAnimal::Monkey => "Monkey",
            LunarAnimal::Rooster => "Rooster",
            LunarAnimal::Dog => "Dog",
            LunarAnimal::Pig => "Pig",
        }
    }
}

impl fmt::Display for LunarAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LunarAnimal {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        // "Sheep" appears in older profile exports as an alias for Goat.
        if lower == "sheep" {
            return Ok(LunarAnimal::Goat);
        }
        LunarAnimal::ALL
            .iter()
            .copied()
            .find(|animal| animal.name().to_ascii_lowercase() == lower)
            .ok_or_else(|| EngineError::InvalidLunarAnimal(s.to_string()))
    }
}

/// The four three-animal trine groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trine {
    Visionaries,
    Strategists,
    Adventurers,
    Artists,
}

impl Trine {
    pub const ALL: [Trine; 4] = [
        Trine::Visionaries,
        Trine::Strategists,
        Trine::Adventurers,
        Trine::Artists,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Trine::Visionaries => "Visionaries",
            Trine::Strategists => "Strategists",
            Trine::Adventurers => "Adventurers",
            Trine::Artists => "Artists",
        }
    }

    /// The three member animals, in branch order.
    pub fn members(self) -> [LunarAnimal; 3] {
        match self {
            Trine::Visionaries => [LunarAnimal::Rat, LunarAnimal::Dragon, LunarAnimal::Monkey],
            Trine::Strategists => [LunarAnimal::Ox, LunarAnimal::Snake, LunarAnimal::Rooster],
            Trine::Adventurers => [LunarAnimal::Tiger, LunarAnimal::Horse, LunarAnimal::Dog],
            Trine::Artists => [LunarAnimal::Rabbit, LunarAnimal::Goat, LunarAnimal::Pig],
        }
    }
}

impl fmt::Display for Trine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// WU XING (FIVE ELEMENTS)
// ============================================================================

/// The five Wu Xing elements assigned to birth years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl FiveElement {
    pub fn name(self) -> &'static str {
        match self {
            FiveElement::Wood => "Wood",
            FiveElement::Fire => "Fire",
            FiveElement::Earth => "Earth",
            FiveElement::Metal => "Metal",
            FiveElement::Water => "Water",
        }
    }
}

impl fmt::Display for FiveElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_ordering_is_zodiacal() {
        assert_eq!(SolarSign::Aries.index(), 0);
        assert_eq!(SolarSign::Libra.index(), 6);
        assert_eq!(SolarSign::Pisces.index(), 11);
    }

    #[test]
    fn test_each_element_has_three_signs() {
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let count = SolarSign::ALL
                .iter()
                .filter(|s| s.element() == element)
                .count();
            assert_eq!(count, 3, "{} should cover exactly 3 signs", element);
        }
    }

    #[test]
    fn test_each_trine_has_three_animals() {
        for trine in Trine::ALL {
            let count = LunarAnimal::ALL
                .iter()
                .filter(|a| a.trine() == trine)
                .count();
            assert_eq!(count, 3, "{} should hold exactly 3 animals", trine);
            for member in trine.members() {
                assert_eq!(member.trine(), trine);
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for sign in SolarSign::ALL {
            assert_eq!(sign.name().parse::<SolarSign>().unwrap(), sign);
            assert_eq!(
                sign.name().to_uppercase().parse::<SolarSign>().unwrap(),
                sign
            );
        }
        for animal in LunarAnimal::ALL {
            assert_eq!(animal.name().parse::<LunarAnimal>().unwrap(), animal);
        }
    }

    #[test]
    fn test_parse_sheep_alias() {
        assert_eq!("sheep".parse::<LunarAnimal>().unwrap(), LunarAnimal::Goat);
        assert_eq!("Sheep".parse::<LunarAnimal>().unwrap(), LunarAnimal::Goat);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!(matches!(
            "Ophiuchus".parse::<SolarSign>(),
            Err(EngineError::InvalidSolarSign(_))
        ));
        assert!(matches!(
            "Unicorn".parse::<LunarAnimal>(),
            Err(EngineError::InvalidLunarAnimal(_))
        ));
    }
}
