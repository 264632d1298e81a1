use crate::keywords::{self, parameter_name_key};
use crate::model::FcsFile;

use super::{ValidationCheck, ValidationReport};

/// Missing `$PnN` keywords named in the warning before the rest are counted
const MAX_LISTED_MISSING: usize = 5;

/// TEXT checks: required keywords, parameter names, escape fragments
pub(crate) fn check_keywords(file: &FcsFile, report: &mut ValidationReport) {
    let text = file.text();

    for keyword in keywords::REQUIRED {
        let check_name = format!("Required keyword {}", keyword);
        if text.get_ignore_case(keyword).is_some() {
            report.add_check(ValidationCheck::ok(check_name));
        } else {
            report.add_check(ValidationCheck::warning(check_name, "Keyword is missing"));
        }
    }

    match (text.get_ignore_case(keywords::PAR), text.parameter_count()) {
        (None, _) => {}
        (Some(raw), None) => {
            report.add_check(ValidationCheck::warning(
                "Parameter names",
                format!("$PAR value {:?} is not a count", raw),
            ));
        }
        (Some(_), Some(count)) => {
            // $PAR is untrusted; work from the names present, never 1..=$PAR
            let named = text.named_parameter_indices();
            let missing_count = count - named.len();
            if missing_count == 0 {
                report.add_check(ValidationCheck::ok(format!("Parameter names ({} of {})", count, count)));
            } else {
                let listed: Vec<String> = (1..=count)
                    .filter(|n| !named.contains(n))
                    .take(MAX_LISTED_MISSING)
                    .map(parameter_name_key)
                    .collect();
                let mut message = format!("Missing {}", listed.join(", "));
                if missing_count > listed.len() {
                    message.push_str(&format!(" and {} more", missing_count - listed.len()));
                }
                report.add_check(ValidationCheck::warning("Parameter names", message));
            }
        }
    }

    if text.contains("") {
        report.add_check(ValidationCheck::warning(
            "No empty keywords",
            format!(
                "Found an empty keyword; the TEXT segment may contain doubled '{}' escapes, which are split literally",
                file.delimiter()
            ),
        ));
    } else {
        report.add_check(ValidationCheck::ok("No empty keywords"));
    }
}
