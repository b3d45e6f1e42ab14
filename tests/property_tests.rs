use nbstrip::{strip, Notebook};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Property tests for output stripping
#[cfg(test)]
mod property_tests {
    use super::*;

    fn output_strategy() -> impl Strategy<Value = Value> {
        ("[a-z]{0,8}", 0u32..100).prop_map(|(text, n)| {
            json!({"output_type": "pyout", "text": [text], "prompt_number": n})
        })
    }

    fn cell_strategy() -> impl Strategy<Value = Value> {
        (
            prop::collection::vec(output_strategy(), 0..4),
            prop::option::of(prop_oneof![
                (0u32..1000).prop_map(|n| json!(n)),
                Just(Value::Null),
            ]),
            prop::bool::ANY,
            "[a-z ]{0,16}",
        )
            .prop_map(|(outputs, prompt, has_outputs, input)| {
                let mut cell = Map::new();
                cell.insert("cell_type".into(), json!("code"));
                cell.insert("input".into(), json!([input]));
                cell.insert("metadata".into(), json!({}));
                if has_outputs {
                    cell.insert("outputs".into(), Value::Array(outputs));
                }
                if let Some(prompt) = prompt {
                    cell.insert("prompt_number".into(), prompt);
                }
                Value::Object(cell)
            })
    }

    fn notebook_strategy() -> impl Strategy<Value = Notebook> {
        prop::collection::vec(prop::collection::vec(cell_strategy(), 0..5), 0..3).prop_map(
            |worksheets| {
                let worksheets: Vec<Value> = worksheets
                    .into_iter()
                    .map(|cells| json!({"cells": cells, "metadata": {}}))
                    .collect();
                serde_json::from_value(json!({
                    "metadata": {"name": "generated"},
                    "nbformat": 3,
                    "nbformat_minor": 0,
                    "worksheets": worksheets
                }))
                .expect("generated notebook is well-formed")
            },
        )
    }

    proptest! {
        #[test]
        fn strip_clears_all_outputs(nb in notebook_strategy(), strip_prompt in prop::bool::ANY) {
            let mut stripped = nb.clone();
            strip(&mut stripped, strip_prompt);

            prop_assert!(stripped.cells().all(|c| c.outputs.is_empty()));
            prop_assert_eq!(stripped.worksheets.len(), nb.worksheets.len());
            prop_assert_eq!(stripped.cell_count(), nb.cell_count());
        }

        #[test]
        fn strip_without_flag_keeps_other_fields(nb in notebook_strategy()) {
            let mut stripped = nb.clone();
            strip(&mut stripped, false);

            prop_assert_eq!(&stripped.extra, &nb.extra);
            for (after, before) in stripped.cells().zip(nb.cells()) {
                prop_assert_eq!(&after.prompt_number, &before.prompt_number);
                prop_assert_eq!(&after.extra, &before.extra);
            }
        }

        #[test]
        fn strip_with_flag_removes_prompt_numbers(nb in notebook_strategy()) {
            let mut stripped = nb.clone();
            strip(&mut stripped, true);

            prop_assert!(stripped.cells().all(|c| c.prompt_number.is_none()));
            for (after, before) in stripped.cells().zip(nb.cells()) {
                prop_assert_eq!(&after.extra, &before.extra);
            }
        }

        #[test]
        fn strip_is_idempotent(nb in notebook_strategy(), strip_prompt in prop::bool::ANY) {
            let mut once = nb;
            strip(&mut once, strip_prompt);
            let mut twice = once.clone();
            strip(&mut twice, strip_prompt);

            prop_assert_eq!(once, twice);
        }
    }
}
