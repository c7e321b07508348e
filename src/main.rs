use evolution_i18n::i18n::{I18n, DEFAULT_LOCALE};
use pico_args;
use unic_langid::LanguageIdentifier;

fn main() {
    let mut args = pico_args::Arguments::from_env();

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap();
    let keys: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();

    let i18n = I18n::new(lang);

    if keys.is_empty() {
        print_coverage(&i18n);
    } else {
        for key in &keys {
            println!("{}", i18n.tr(key));
        }
    }
}

/// Per-locale translation coverage against the default catalog.
fn print_coverage(i18n: &I18n) {
    let default_locale = DEFAULT_LOCALE
        .parse::<LanguageIdentifier>()
        .expect("default locale tag is valid");
    let reference = match i18n.catalogs().get(&default_locale) {
        Some(tree) => tree.leaf_keys(),
        None => {
            eprintln!("default catalog '{}' is not embedded", DEFAULT_LOCALE);
            return;
        }
    };

    println!(
        "{} keys in the '{}' catalog",
        reference.len(),
        DEFAULT_LOCALE
    );
    for locale in i18n.available_locales() {
        let missing = i18n.catalogs().missing_keys(locale, &reference);
        let present = reference.len() - missing.len();
        println!("{}: {}/{} keys", locale, present, reference.len());
        for key in &missing {
            println!("  missing {}", key);
        }
    }
}
