use std::path::Path;

use crate::{errors::Error, view::FormView, Result};

const VIEWS_DIR: &str = "assets/views";
const BUNDLED_FORM: &str = include_str!("../assets/views/password/form.html");

pub const FORM_TEMPLATE: &str = "password/form.html";

#[derive(Debug, Clone)]
pub struct TeraView {
    tera: tera::Tera,
}

impl TeraView {
    /// Uses `assets/views` when it exists, the compiled-in form otherwise.
    pub fn build() -> Result<Self> {
        if Path::new(VIEWS_DIR).is_dir() {
            Self::from_dir(VIEWS_DIR)
        } else {
            Self::bundled()
        }
    }

    pub fn bundled() -> Result<Self> {
        let mut tera = tera::Tera::default();
        tera.add_raw_template(FORM_TEMPLATE, BUNDLED_FORM)?;
        Ok(Self { tera })
    }

    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(Error::string(&format!(
                "missing views directory: `{}`",
                path.display()
            )));
        }

        let pattern = path.join("**").join("*.html");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::string("views directory is not valid UTF-8"))?;
        let tera = tera::Tera::new(pattern)?;
        if !tera.get_template_names().any(|name| name == FORM_TEMPLATE) {
            return Err(Error::string(&format!(
                "`{}` has no `{}` template",
                path.display(),
                FORM_TEMPLATE
            )));
        }
        Ok(Self { tera })
    }

    pub fn render_form(&self, view: &FormView) -> Result<String> {
        let context = tera::Context::from_serialize(view)?;
        Ok(self.tera.render(FORM_TEMPLATE, &context)?)
    }
}
