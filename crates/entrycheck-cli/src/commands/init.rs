//! The `entrycheck init` command.

use anyhow::Result;

use entrycheck_core::parser::LOCAL_RULES_FILE;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new(LOCAL_RULES_FILE);
    if path.exists() {
        println!("{LOCAL_RULES_FILE} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, STARTER_RULES)?;
    println!("Created {LOCAL_RULES_FILE}");

    println!("\nNext steps:");
    println!("  1. Edit {LOCAL_RULES_FILE} to match your institution's requirements");
    println!("  2. Run: entrycheck validate --rules {LOCAL_RULES_FILE}");
    println!("  3. Run: entrycheck evaluate --qualification spm --credits 5 --english B --bm C --math A");

    Ok(())
}

pub const STARTER_RULES: &str = r#"# entrycheck rule table
#
# One [[qualifications]] block per qualification. Grades are single letters;
# an applicant's grade must be this letter or better (A is best).

[[qualifications]]
qualification = "SPM"
min_credits = 5
credit_grade = "C"
notes = [
    "Note: This checker validates against minimum requirements. Specific 'relevant subjects' are determined by the university.",
    "Note for SPM: Applicants with 3 or 4 Grade C may still be considered (check official TARUMT guidelines).",
]

[qualifications.grades]
english = "C"
bahasa_malaysia = "C"
mathematics = "B"

[[qualifications]]
qualification = "OLevel"
min_credits = 5
credit_grade = "C"
notes = [
    "Note: This checker validates against minimum requirements. Specific 'relevant subjects' are determined by the university.",
]

[qualifications.grades]
english = "C"
mathematics = "C"

[[qualifications]]
qualification = "UEC"
min_credits = 3
credit_grade = "B"
notes = [
    "Note: This checker validates against minimum requirements. Specific 'relevant subjects' are determined by the university.",
]

[qualifications.grades]
english = "C"
mathematics = "B"
"#;
