use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account
    SignUp {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "PM_PASSWORD")]
        password: String,
    },

    /// Sign in and print the session token
    SignIn {
        #[arg(long)]
        email: String,

        #[arg(long, env = "PM_PASSWORD")]
        password: String,
    },

    /// List registered users
    Users,
}
