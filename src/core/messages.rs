use crate::domain::model::AppDescriptor;

pub const RULE: &str = "==================================================";
pub const PROJECT_URL: &str = "https://github.com/kenjis/codeigniter-composer-installer";

pub fn guidance_lines(apps: &[AppDescriptor]) -> Vec<String> {
    let mut lines = vec![RULE.to_string()];

    for app in apps {
        lines.push(format!(
            "`{}/.htaccess` was installed. If you don't need it, please remove it.",
            app.doc_root.trim_end_matches('/')
        ));
    }

    lines.extend(
        [
            "If you want to install translations for system messages or some third party libraries,",
            "$ cd <codeigniter_project_folder>",
            "$ php bin/install.php",
            "Above command will show help message.",
        ]
        .map(String::from),
    );
    lines.push(format!("See <{}> for details", PROJECT_URL));
    lines.push(RULE.to_string());
    lines
}
