use crate::commands::prompts;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use movieflix_config::PathManager;
use movieflix_core::{AuthContext, AuthService};
use movieflix_models::{Account, LoginData, SignupData};

fn context(paths: &PathManager) -> Result<AuthContext> {
    paths
        .ensure_directories()
        .map_err(|e| eyre!("{}", e))?;
    Ok(AuthContext::initialize(AuthService::from_paths(paths))?)
}

/// Resolve the logged-in account or fail with a hint. Used by every
/// command that requires a session.
pub fn require_session(paths: &PathManager) -> Result<Account> {
    let ctx = context(paths)?;
    ctx.current()
        .cloned()
        .ok_or_else(|| eyre!("Not logged in; run `movieflix login` first"))
}

pub fn run_signup(
    paths: &PathManager,
    name: Option<String>,
    email: Option<String>,
    output: &Output,
) -> Result<()> {
    let mut ctx = context(paths)?;

    let name = match name {
        Some(name) => name,
        None => prompts::prompt_string("Name", None)?,
    };
    let email = match email {
        Some(email) => email,
        None => prompts::prompt_string("Email", None)?,
    };
    let password = prompts::prompt_password("Password")?;
    let confirm_password = prompts::prompt_password("Confirm password")?;

    let account = ctx.signup(&SignupData {
        name,
        email,
        password,
        confirm_password,
    })?;

    output.success(format!("Signed up and logged in as {}", account.email));
    Ok(())
}

pub fn run_login(paths: &PathManager, email: Option<String>, output: &Output) -> Result<()> {
    let mut ctx = context(paths)?;

    let email = match email {
        Some(email) => email,
        None => prompts::prompt_string("Email", None)?,
    };
    let password = prompts::prompt_password("Password")?;

    let account = ctx.login(&LoginData { email, password })?;
    output.success(format!("Logged in as {}", account.email));
    Ok(())
}

pub fn run_logout(paths: &PathManager, output: &Output) -> Result<()> {
    let mut ctx = context(paths)?;
    ctx.logout()?;
    output.success("Logged out");
    Ok(())
}

pub fn run_whoami(paths: &PathManager, output: &Output) -> Result<()> {
    let ctx = context(paths)?;
    match ctx.current() {
        Some(account) => output.info(format!("{} <{}>", account.name, account.email)),
        None => output.info("Not logged in"),
    }
    Ok(())
}
