use crate::dictionary::Dictionary;
use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::log::init_logger;
use crate::results::FoundWord;
use crate::solver::solve;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "B001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<PuzzleError> for WasmError {
    fn from(e: PuzzleError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);
        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and the panic hook.
///
/// Must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmFoundWord {
    word: String,
    x: isize,
    y: isize,
    path: String,
}

impl From<FoundWord> for WasmFoundWord {
    fn from(f: FoundWord) -> Self {
        let path = f.path_string();
        WasmFoundWord {
            word: f.word,
            x: f.start.x,
            y: f.start.y,
            path,
        }
    }
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    found: Vec<WasmFoundWord>,
    origins: usize,
    cells_entered: u64,
}

fn string_array(value: JsValue, name: &str) -> Result<Vec<String>, WasmError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("{name} must be string[]: {e}"),
        description: "Invalid input format".to_string(),
        help: Some("Pass a JavaScript array of strings, e.g. ['CAT', 'DOG']".to_string()),
    })
}

/// JS entry: (words: string[], rows: string[]) -> { found: [{word, x, y, path}], origins, cells_entered }
#[wasm_bindgen]
pub fn solve_boggle_wasm(words: JsValue, rows: JsValue) -> Result<JsValue, JsValue> {
    let words = string_array(words, "words")?;
    let rows = string_array(rows, "rows")?;

    let dictionary = Dictionary::from_words(&words).map_err(WasmError::from)?;
    let grid = Grid::from_rows(&rows).map_err(WasmError::from)?;
    let result = solve(dictionary.trie(), &grid);

    let wasm_result = WasmSolveResult {
        origins: result.stats.origins,
        cells_entered: result.stats.cells_entered,
        found: result.found.into_iter().map(WasmFoundWord::from).collect(),
    };

    serde_wasm_bindgen::to_value(&wasm_result).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Formatted report users can paste into a bug report.
#[wasm_bindgen]
pub fn get_debug_info(error_message: &str, dictionary_size: usize, grid_width: usize, grid_height: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String never fails
    let _ = writeln!(&mut report, "=== BOGGLE DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(&mut report, "Commit: {}", env!("GIT_HASH"));
    let _ = writeln!(&mut report);
    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);
    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Dictionary Size: {dictionary_size}");
    let _ = writeln!(&mut report, "Grid: {grid_width}x{grid_height}");
    let _ = writeln!(&mut report);
    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
    }
    let _ = writeln!(&mut report);
    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("Invalid grid", 1000, 4, 4);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== BOGGLE DEBUG REPORT ===");
        assert_eq!(lines[1], format!("Version: {}", env!("CARGO_PKG_VERSION")));
        assert_eq!(lines[4], "## Error");
        assert_eq!(lines[5], "Invalid grid");
        assert_eq!(lines[8], "Dictionary Size: 1000");
        assert_eq!(lines[9], "Grid: 4x4");
        assert_eq!(lines.last(), Some(&"=== END DEBUG REPORT ==="));
    }

    #[test]
    fn test_wasm_found_word_flattens_path() {
        let found = FoundWord {
            word: "CAT".to_string(),
            start: crate::direction::Coord::new(1, 3),
            path: vec![crate::direction::Direction::Right, crate::direction::Direction::Right],
        };
        let flat = WasmFoundWord::from(found);
        assert_eq!((flat.x, flat.y, flat.path.as_str()), (1, 3, "RR"));
    }
}
