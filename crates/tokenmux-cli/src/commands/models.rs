use tokenmux::{BackendFamily, BackendRegistries, BackendRegistry, pretrained::huggingface};

/// Args for the model listing command.
#[derive(clap::Args, Debug)]
pub struct ModelsArgs {
    /// Only list this family ("openai", "huggingface" / "hf").
    #[arg(long, short)]
    family: Option<BackendFamily>,
}

impl ModelsArgs {
    /// Run the model listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let registries = BackendRegistries::default();
        for line in list_models(&registries, self.family) {
            println!("{line}");
        }
        Ok(())
    }
}

fn list_models(
    registries: &BackendRegistries,
    family: Option<BackendFamily>,
) -> Vec<String> {
    let mut lines = Vec::new();
    for fam in BackendFamily::PRIORITY {
        if family.is_some_and(|f| f != fam) {
            continue;
        }

        lines.push(format!("\"{fam}\""));
        for model in registries.models(fam) {
            let detail = match fam {
                BackendFamily::OpenAI => registries.schemes.lookup(&model).map(|tag| tag.to_string()),
                BackendFamily::Huggingface => huggingface::find_model(&model).map(|m| m.repo.to_string()),
            };
            match detail {
                Some(detail) => lines.push(format!("  * \"{model}\" ({detail})")),
                None => lines.push(format!("  * \"{model}\"")),
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_models() {
        let registries = BackendRegistries::default();

        let all = list_models(&registries, None);
        assert_eq!(all[0], "\"openai\"");
        assert!(all.contains(&"  * \"gpt-4\" (cl100k_base)".to_string()));
        assert!(all.contains(&"\"huggingface\"".to_string()));
        assert!(all.contains(&"  * \"Llama-3.2-1B\" (meta-llama/Llama-3.2-1B)".to_string()));

        let hf = list_models(&registries, Some(BackendFamily::Huggingface));
        assert_eq!(hf[0], "\"huggingface\"");
        assert_eq!(hf.len(), 1 + huggingface::HUGGINGFACE_MODELS.len());
    }
}
