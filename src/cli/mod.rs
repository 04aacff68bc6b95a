use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP relay (the default when no command is given)
    Serve,

    /// Send a single user message through the relay and print the reply
    Ask {
        /// Message text, as a client would type it
        text: String,
    },

    /// Print the effective system prompt and exit
    Prompt,
}
