//! Profile derivation helpers.
//!
//! Signup/backfill utilities: solar sign from a birth date (tropical date
//! ranges) and lunar animal from a birth year (12-year cycle anchored at
//! 1984 = Rat). The animal helper is a solar-year approximation; people
//! born in January/early February before the lunar new year may belong to
//! the previous animal, which callers handling precise birth data resolve
//! upstream.

use chrono::{Datelike, NaiveDate};

use crate::signs::{LunarAnimal, SolarSign};
use crate::tables::WU_XING_REFERENCE_YEAR;

/// Solar sign for a birth date, tropical boundaries.
pub fn solar_sign_for_date(date: NaiveDate) -> SolarSign {
    match (date.month(), date.day()) {
        (3, 21..) | (4, ..=19) => SolarSign::Aries,
        (4, 20..) | (5, ..=20) => SolarSign::Taurus,
        (5, 21..) | (6, ..=20) => SolarSign::Gemini,
        (6, 21..) | (7, ..=22) => SolarSign::Cancer,
        (7, 23..) | (8, ..=22) => SolarSign::Leo,
        (8, 23..) | (9, ..=22) => SolarSign::Virgo,
        (9, 23..) | (10, ..=22) => SolarSign::Libra,
        (10, 23..) | (11, ..=21) => SolarSign::Scorpio,
        (11, 22..) | (12, ..=21) => SolarSign::Sagittarius,
        (12, 22..) | (1, ..=19) => SolarSign::Capricorn,
        (1, 20..) | (2, ..=18) => SolarSign::Aquarius,
        _ => SolarSign::Pisces, // Feb 19 - Mar 20
    }
}

/// Lunar animal for a birth year. 1984 anchors a Rat year.
pub fn lunar_animal_for_year(year: i32) -> LunarAnimal {
    let offset = (year - WU_XING_REFERENCE_YEAR).rem_euclid(12) as usize;
    LunarAnimal::ALL[offset]
}
