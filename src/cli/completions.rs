use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    fixnotes completions bash > ~/.bash_completion.d/fixnotes\n\n\
                  Generate zsh completions:\n    fixnotes completions zsh > ~/.zfunc/_fixnotes\n\n\
                  Generate fish completions:\n    fixnotes completions fish > ~/.config/fish/completions/fixnotes.fish\n\n\
                  Generate PowerShell completions:\n    fixnotes completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
