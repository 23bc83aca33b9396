use crate::cli::ShowArgs;
use crate::document::Document;
use crate::error::{CliError, Result};
use atomlink::model::output::ModelOutput;
use atomlink::system::neighbors::NeighborListOptions;
use tracing::info;

pub fn run(args: ShowArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.file).map_err(|e| CliError::FileRead {
        path: args.file.clone(),
        source: e,
    })?;

    let document = Document::parse(&contents, None).map_err(|e| CliError::FileParsing {
        path: args.file.clone(),
        source: e.into(),
    })?;

    info!(
        "Loaded a {} document from '{}'.",
        document.class_name(),
        args.file.display()
    );

    print!("{}", render_document(&document));

    Ok(())
}

fn render_document(document: &Document) -> String {
    let mut text = String::new();

    match document {
        Document::NeighborListOptions(options) => {
            render_neighbor_list_options(&mut text, options);
        }
        Document::Output(output) => {
            text.push_str("ModelOutput\n");
            render_output(&mut text, 1, output);
        }
        Document::Capabilities(capabilities) => {
            text.push_str("ModelCapabilities\n");
            push_field(&mut text, 1, "length unit", &capabilities.length_unit);
            if capabilities.species.is_empty() {
                text.push_str("  atomic species: none\n");
            } else {
                let species = join_numbers(&capabilities.species);
                text.push_str(&format!("  atomic species: {}\n", species));
            }
            render_outputs(&mut text, &capabilities.outputs);
        }
        Document::RunOptions(run) => {
            text.push_str("ModelRunOptions\n");
            push_field(&mut text, 1, "length unit", &run.length_unit);
            match &run.selected_atoms {
                None => text.push_str("  selection: all atoms\n"),
                Some(atoms) => {
                    text.push_str(&format!(
                        "  selection: {} atom(s) [{}]\n",
                        atoms.len(),
                        join_numbers(atoms)
                    ));
                }
            }
            render_outputs(&mut text, &run.outputs);
        }
        Document::Metadata(metadata) => {
            text.push_str(&metadata.to_string());
        }
    }

    text
}

fn render_neighbor_list_options(text: &mut String, options: &NeighborListOptions) {
    text.push_str("NeighborListOptions\n");
    text.push_str(&format!(
        "  cutoff (model units): {}\n",
        options.model_cutoff()
    ));
    let pairs = if options.full_list() {
        "full (each pair listed in both directions)"
    } else {
        "half (each pair listed once)"
    };
    text.push_str(&format!("  pair list: {}\n", pairs));
    if !options.requestors().is_empty() {
        text.push_str("  requested by:\n");
        for requestor in options.requestors() {
            text.push_str(&format!("    - {}\n", requestor));
        }
    }
}

fn render_outputs(
    text: &mut String,
    outputs: &std::collections::BTreeMap<String, ModelOutput>,
) {
    if outputs.is_empty() {
        text.push_str("  outputs: none\n");
        return;
    }

    text.push_str("  outputs:\n");
    for (name, output) in outputs {
        text.push_str(&format!("    {}:\n", name));
        render_output(text, 3, output);
    }
}

fn render_output(text: &mut String, indent: usize, output: &ModelOutput) {
    push_field(text, indent, "quantity", &output.quantity);
    push_field(text, indent, "unit", &output.unit);

    let pad = "  ".repeat(indent);
    let granularity = if output.per_atom {
        "per atom"
    } else {
        "per structure"
    };
    text.push_str(&format!("{}granularity: {}\n", pad, granularity));

    if output.forward_gradients.is_empty() {
        text.push_str(&format!("{}forward gradients: none\n", pad));
    } else {
        text.push_str(&format!(
            "{}forward gradients: {}\n",
            pad,
            output.forward_gradients.join(", ")
        ));
    }
}

fn push_field(text: &mut String, indent: usize, label: &str, value: &str) {
    let value = if value.is_empty() { "unspecified" } else { value };
    text.push_str(&format!("{}{}: {}\n", "  ".repeat(indent), label, value));
}

fn join_numbers(numbers: &[i32]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
