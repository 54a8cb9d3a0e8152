#![allow(missing_docs)]

use proptest::prelude::*;
use strum::IntoEnumIterator;
use tokenmux::{
    TokenizerBackend,
    TokenizerService,
    backends::openai::{EncodingScheme, OpenAIHandler},
};

const SAMPLES: &[&str] = &[
    "hello world",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "Don't forget: the temperature is 72 degrees!",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "Geburtstag 2024: Alles Gute!",
    "$$$!!!...---",
    " ",
    "a",
    "\t\ttabs\tand\tspaces ",
    "emoji: \u{1f600}\u{1f680}\u{1f4a1}",
    "mixed: hello\u{00a0}world\u{2003}wide",
];

#[test]
fn scheme_round_trips() {
    for scheme in EncodingScheme::iter() {
        let handler: OpenAIHandler<u32> =
            OpenAIHandler::from_scheme(scheme, Default::default()).unwrap();

        for text in SAMPLES {
            let tokens = handler.encode(text).unwrap();
            let decoded = handler.decode(&tokens.ids).unwrap();
            assert_eq!(&decoded, text, "Roundtrip mismatch for {scheme}: {text:?}");
        }
    }
}

#[test]
fn scheme_matches_tiktoken() {
    for scheme in EncodingScheme::iter() {
        let handler: OpenAIHandler<u32> =
            OpenAIHandler::from_scheme(scheme, Default::default()).unwrap();
        let bpe = scheme.load_bpe().unwrap();

        for text in SAMPLES {
            assert_eq!(
                handler.encode(text).unwrap().ids,
                bpe.encode_ordinary(text),
                "Encode mismatch (tokenmux vs tiktoken) for {scheme}: {text:?}"
            );
        }
    }
}

#[test]
fn service_matches_scheme() {
    let cases = [
        ("gpt-4", EncodingScheme::Cl100kBase),
        ("gpt-3.5-turbo", EncodingScheme::Cl100kBase),
        ("gpt-4o", EncodingScheme::O200kBase),
        ("o1-mini", EncodingScheme::O200kBase),
    ];
    for (model, scheme) in cases {
        let service: TokenizerService = TokenizerService::new(model).unwrap();
        let bpe = scheme.load_bpe().unwrap();
        for text in SAMPLES {
            assert_eq!(
                service.encode(text).unwrap().ids,
                bpe.encode_ordinary(text),
                "{model}: {text:?}"
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn cl100k_round_trip(text in any::<String>()) {
        thread_local! {
            static SERVICE: TokenizerService = TokenizerService::new("gpt-4").unwrap();
        }
        SERVICE.with(|service| {
            let tokens = service.encode(&text).unwrap();
            prop_assert_eq!(service.decode(&tokens.ids).unwrap(), text.clone());
            Ok(())
        })?;
    }
}

/// These fetch real `tokenizer.json` files through the default mirrors,
/// so they need network access (or pre-placed data files).
#[cfg(feature = "download")]
mod downloads {
    use tokenmux::{BackendFamily, TokenizerService, pretrained::huggingface::HUGGINGFACE_MODELS};

    use super::SAMPLES;

    #[test]
    #[ignore]
    fn huggingface_round_trips() {
        for model in HUGGINGFACE_MODELS {
            let service: TokenizerService = TokenizerService::new(model.name).unwrap();
            assert_eq!(service.family(), BackendFamily::Huggingface);

            for text in SAMPLES {
                let tokens = service.encode(text).unwrap();
                assert_eq!(&service.decode(&tokens.ids).unwrap(), text, "{}", model.name);
            }
        }
    }

    #[test]
    #[ignore]
    fn llama_hello_world() {
        let service: TokenizerService = TokenizerService::new("Llama-3.2-1B").unwrap();
        let tokens = service.encode("hello world").unwrap();
        assert_eq!(tokens.ids, vec![15339, 1917]);
    }
}
