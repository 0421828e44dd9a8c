//! CLI showcase page.
//!
//! DESIGN
//! ======
//! Terminal transcripts are markup; the command reference and bullet lists
//! are data so their copy can be checked in tests.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use leptos::prelude::*;

use crate::components::terminal::Terminal;

pub const CLI_BANNER: &str = r"
     _            _    _                       ____ _     ___
  __| | __ _ _ __| | _| | __ _ _ __   __ _    / ___| |   |_ _|
/ _  | / _  | '__| |/ / | / _  | '_ \ / _  | | |   | |    | |
| (_| | (_| | |  |   <| | (_| | | | | (_| |  | |___| |___ | |
\__,_|\__,_ |_|  |_|\_\_|\__,_|_| |_|\__,  |  \____|_____|___|
                                      |___/
";

/// One row of the command reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CliCommand {
    pub verb: &'static str,
    /// Accent color modifier for the verb.
    pub accent: &'static str,
    pub description: &'static str,
}

pub const CLI_COMMANDS: &[CliCommand] = &[
    CliCommand { verb: "help", accent: "blue", description: "Show this help message and exit" },
    CliCommand {
        verb: "[function name]",
        accent: "tan",
        description: "Run a function in the package manager i.e. `dark @Darklang.Stdlib.Bool.not true`",
    },
    CliCommand {
        verb: "run [script path]",
        accent: "mint",
        description: "Run a .dark script i.e. `dark ./my-script.dark`",
    },
    CliCommand {
        verb: "install",
        accent: "purple",
        description: "Install the darklang CLI so it's available globally in your terminal",
    },
    CliCommand { verb: "http", accent: "sand", description: "Lists both local and cloud handlers" },
    CliCommand { verb: "dbs", accent: "olive", description: "Lists both local and cloud dbs" },
];

pub const BASH_PROBLEMS: &[&str] = &[
    "lack of a package manager means the generated code has to use cli tools, which each have \
     different interfaces, which may not be installed, and are often opaque",
    "different versions of the tools might be installed with subtly different behaviour (esp gnu vs bsd)",
    "lack of real types and functions (which are a mess in bash) contributes to these problems",
];

/// Script benefits; `true` marks a nested sub-point.
pub const SCRIPT_BENEFITS: &[(&str, bool)] = &[
    ("Static types help ensure correctness", false),
    ("Immutable values make code easier to understand and verify", false),
    ("Built-in package manager", false),
    ("without an npm install step", true),
    ("versioned immutable functions and packages", true),
    ("Easy to take a script and move it to the cloud", false),
    ("Easy to use traces", false),
    ("Easy to test, and be sure it's working", false),
];

#[component]
fn Prompt(text: &'static str) -> impl IntoView {
    view! { <div class="cli-page__prompt">{format!("$ darklang {text} |")}</div> }
}

#[component]
pub fn CliPage() -> impl IntoView {
    view! {
        <div class="cli-page">
            <section class="cli-page__section cli-page__banner">
                <pre>{CLI_BANNER}</pre>
            </section>

            <section class="cli-page__section">
                <Prompt text="platform"/>
                <h2 class="cli-page__lead">
                    "Darklang's CLI is fully cross-platform, seamlessly running on macOS, Linux, "
                    "and Windows for a consistent development experience everywhere"
                </h2>
                <a class="button button--primary" href="#getting-started">">_ Try It Now!"</a>
            </section>

            <section class="cli-page__section">
                <Prompt text="solving bash complexities"/>
                <p>
                    "Darklang CLI is a better replacement for traditional file-based scripts, such "
                    "as in bash, python, lua, js, etc."
                </p>
                <p>
                    "bash is super hard to read, using weird variable names. While lots of us can "
                    "read and write bash scripts, since there are few experts, it's not a great language."
                </p>
                <ul class="cli-page__dashes">
                    {BASH_PROBLEMS.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                </ul>
            </section>

            <section class="cli-page__section">
                <Prompt text="for your scripts"/>
                <p>"Darklang is used as a better language for scripts:"</p>
                <ul class="cli-page__benefits">
                    {SCRIPT_BENEFITS
                        .iter()
                        .map(|(text, nested)| {
                            view! {
                                <li class="cli-page__benefit" class:cli-page__benefit--nested=*nested>
                                    <span class="cli-page__bullet">{if *nested { "✓" } else { "›" }}</span>
                                    {*text}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="cli-page__section">
                <Prompt text="examples"/>
                <div class="cli-page__terminals">
                    <Terminal>
                        <div>
                            "$ " <span class="term-accent">"curl"</span> " https://darklang.com/download | "
                            <span class="term-accent--purple">"bash"</span>
                        </div>
                        <div>"Darklang installed in " <span class="term-muted">"~/.darklang/bin/darklang"</span></div>
                        <div>"Add to PATH via .bashrc " <span class="term-muted">"[y, n, ?]:"</span> " y"</div>
                        <div><span class="term-ok">"✓ "</span> "Added to .bashrc."</div>
                        <div>"Next you can:"</div>
                        <p class="term-comment">"# Try the tutorial"</p>
                        <p>"darklang tutorial"</p>
                        <p class="term-comment">"# Run some code from the package manager"</p>
                        <p>"@paul.fizzbuzz 3"</p>
                        <p class="term-comment">"# See available command line options"</p>
                        <p>"darklang help"</p>
                    </Terminal>
                    <div class="cli-page__stack">
                        <Terminal>
                            <div>"$ " <span class="term-accent--purple">"darklang"</span> " @paul.fizzbuzz 3"</div>
                            <div>"1"</div>
                            <div>"2"</div>
                            <div>"Fizz"</div>
                        </Terminal>
                        <Terminal>
                            <div>"$ " <span class="term-accent--purple">"darklang"</span> " deploy @paul.fizzbuzz /fizzbuzz"</div>
                            <div>"Deployed to " <span class="term-muted">"https://furry-squirrel-3562.darklang.io/fizzbuzz"</span></div>
                            <div>"in " <span class="term-olive">"0.135s"</span></div>
                        </Terminal>
                        <Terminal>
                            <div>"$ curl -sSO " <span class="term-muted">"https://furry-squirrel-3562.darklang.io/fizzbuzz/3"</span></div>
                            <div>"1"</div>
                            <div>"2"</div>
                            <div>"Fizz"</div>
                        </Terminal>
                    </div>
                </div>
            </section>

            <section class="cli-page__section">
                <Prompt text="commands"/>
                <div class="cli-page__commands">
                    {CLI_COMMANDS
                        .iter()
                        .map(|cmd| {
                            view! {
                                <div class="cli-page__command">
                                    <div class="cli-page__verb">
                                        "dark "
                                        <span class=format!("accent--{}", cmd.accent)>{cmd.verb}</span>
                                    </div>
                                    <div class="cli-page__description">{cmd.description}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="getting-started" class="cli-page__section cli-page__cta">
                <h1>"Getting Started with Darklang CLI"</h1>
                <p>"Write your first script in Darklang today and have it running in minutes"</p>
                <a class="button button--primary" href="https://darklang.com/download">">_ Try It Now!"</a>
            </section>
        </div>
    }
}
