use crate::core::notebook::Notebook;
use serde::Serialize;

/// Clear outputs of every cell in `notebook`, in place.
///
/// When `strip_prompt` is set the `prompt_number` of each cell is dropped as
/// well. Cells without a prompt number are left alone.
pub fn strip(notebook: &mut Notebook, strip_prompt: bool) {
    for cell in notebook.cells_mut() {
        cell.outputs.clear();
        if strip_prompt {
            cell.prompt_number = None;
        }
    }
}

/// What a call to [`strip`] removes from a notebook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StripStats {
    pub worksheets: usize,
    pub cells: usize,
    /// Output entries that get cleared
    pub outputs: usize,
    /// Prompt numbers that get removed
    pub prompts: usize,
}

impl StripStats {
    /// Count what `strip(notebook, strip_prompt)` would remove. Read-only.
    pub fn measure(notebook: &Notebook, strip_prompt: bool) -> Self {
        let mut stats = Self {
            worksheets: notebook.worksheets.len(),
            ..Self::default()
        };

        for cell in notebook.cells() {
            stats.cells += 1;
            stats.outputs += cell.outputs.len();
            if strip_prompt && cell.has_prompt_number() {
                stats.prompts += 1;
            }
        }

        stats
    }

    pub fn is_clean(&self) -> bool {
        self.outputs == 0 && self.prompts == 0
    }
}
