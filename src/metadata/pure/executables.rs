//! Executable file names per edition and language

use crate::metadata::types::{Edition, Language};

pub const GILDE_EXE_PATH: &str = "Gilde.exe";
pub const GILDE_GOLD_EXE_PATH: &str = "GildeGold.exe";
pub const EUROPA1400_EXE_PATH: &str = "Europa1400.exe";
pub const EUROPA1400_GOLD_EXE_PATH: &str = "Europa1400Gold.exe";

pub const GILDE_TL_EXE_PATH: &str = "Gilde_TL.exe";
pub const GILDE_GOLD_TL_EXE_PATH: &str = "GildeGold_TL.exe";
pub const EUROPA1400_TL_EXE_PATH: &str = "Europa1400_TL.exe";
pub const EUROPA1400_GOLD_TL_EXE_PATH: &str = "Europa1400Gold_TL.exe";

/// (edition, german, executable, translation-layer executable)
const EXECUTABLES: [(Edition, bool, &str, &str); 4] = [
    (Edition::Standard, true, GILDE_EXE_PATH, GILDE_TL_EXE_PATH),
    (Edition::Standard, false, EUROPA1400_EXE_PATH, EUROPA1400_TL_EXE_PATH),
    (Edition::Gold, true, GILDE_GOLD_EXE_PATH, GILDE_GOLD_TL_EXE_PATH),
    (Edition::Gold, false, EUROPA1400_GOLD_EXE_PATH, EUROPA1400_GOLD_TL_EXE_PATH),
];

/// Main and translation-layer executable names for a variant.
///
/// German installs use the "Gilde" names, every other language (including an
/// unknown one) the international "Europa1400" names.
pub fn executable_pair(edition: Edition, language: Option<Language>) -> (&'static str, &'static str) {
    let german = language == Some(Language::German);
    EXECUTABLES
        .iter()
        .find(|(e, g, _, _)| *e == edition && *g == german)
        .map(|(_, _, exe, tl)| (*exe, *tl))
        .unwrap_or((EUROPA1400_EXE_PATH, EUROPA1400_TL_EXE_PATH))
}
