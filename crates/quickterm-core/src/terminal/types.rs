/// How the shell command is handed to the terminal's exec option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecFormat {
    /// The command is appended as separate words (`xterm -e ipython3 --no-banner`).
    Expanded,
    /// The command is passed as one quoted argument (`termite -e 'ipython3 --no-banner'`).
    String,
}

impl ExecFormat {
    pub fn placeholder(self) -> &'static str {
        match self {
            ExecFormat::Expanded => "expanded",
            ExecFormat::String => "string",
        }
    }
}

/// Command-line conventions of a known terminal emulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSpec {
    pub executable: &'static str,
    pub exec_option: &'static str,
    pub exec_format: ExecFormat,
    pub title_option: Option<&'static str>,
    pub class_option: Option<&'static str>,
}

impl TerminalSpec {
    pub const fn new(executable: &'static str) -> Self {
        Self {
            executable,
            exec_option: "-e",
            exec_format: ExecFormat::Expanded,
            title_option: Some("-T"),
            class_option: None,
        }
    }

    pub const fn exec_option(mut self, option: &'static str) -> Self {
        self.exec_option = option;
        self
    }

    pub const fn exec_format(mut self, format: ExecFormat) -> Self {
        self.exec_format = format;
        self
    }

    pub const fn title_option(mut self, option: Option<&'static str>) -> Self {
        self.title_option = option;
        self
    }

    pub const fn class_option(mut self, option: Option<&'static str>) -> Self {
        self.class_option = option;
        self
    }

    /// Render the launch template, e.g. `kitty -T {title} --class {class_name} -e {expanded}`.
    pub fn template(&self) -> String {
        let mut template = self.executable.to_string();
        if let Some(title) = self.title_option {
            template.push_str(&format!(" {} {{title}}", title));
        }
        if let Some(class) = self.class_option {
            template.push_str(&format!(" {} {{class_name}}", class));
        }
        template.push_str(&format!(
            " {} {{{}}}",
            self.exec_option,
            self.exec_format.placeholder()
        ));
        template
    }
}
