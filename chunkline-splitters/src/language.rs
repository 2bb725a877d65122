use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SplitterConfigError;

/// Source languages and markup formats with a built-in separator preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Go,
    Java,
    Kotlin,
    Js,
    Ts,
    Php,
    Proto,
    Python,
    Rst,
    Ruby,
    Rust,
    Scala,
    Swift,
    Markdown,
    Latex,
    Html,
    Sol,
    CSharp,
    Cobol,
    C,
    Lua,
    Perl,
    Haskell,
    Elixir,
    PowerShell,
}

const C_FAMILY: &[&str] = &[
    "\nclass ", "\nvoid ", "\nint ", "\nfloat ", "\ndouble ", "\nif ", "\nfor ", "\nwhile ",
    "\nswitch ", "\ncase ", "\n\n", "\n", " ", "",
];

const GO: &[&str] = &[
    "\nfunc ", "\nvar ", "\nconst ", "\ntype ", "\nif ", "\nfor ", "\nswitch ", "\ncase ", "\n\n",
    "\n", " ", "",
];

const JAVA: &[&str] = &[
    "\nclass ", "\npublic ", "\nprotected ", "\nprivate ", "\nstatic ", "\nif ", "\nfor ",
    "\nwhile ", "\nswitch ", "\ncase ", "\n\n", "\n", " ", "",
];

const KOTLIN: &[&str] = &[
    "\nclass ", "\npublic ", "\nprotected ", "\nprivate ", "\ninternal ", "\ncompanion ",
    "\nfun ", "\nval ", "\nvar ", "\nif ", "\nfor ", "\nwhile ", "\nwhen ", "\ncase ", "\nelse ",
    "\n\n", "\n", " ", "",
];

const JS: &[&str] = &[
    "\nfunction ", "\nconst ", "\nlet ", "\nvar ", "\nclass ", "\nif ", "\nfor ", "\nwhile ",
    "\nswitch ", "\ncase ", "\ndefault ", "\n\n", "\n", " ", "",
];

const TS: &[&str] = &[
    "\nenum ", "\ninterface ", "\nnamespace ", "\ntype ", "\nclass ", "\nfunction ", "\nconst ",
    "\nlet ", "\nvar ", "\nif ", "\nfor ", "\nwhile ", "\nswitch ", "\ncase ", "\ndefault ",
    "\n\n", "\n", " ", "",
];

const PHP: &[&str] = &[
    "\nfunction ", "\nclass ", "\nif ", "\nforeach ", "\nwhile ", "\ndo ", "\nswitch ",
    "\ncase ", "\n\n", "\n", " ", "",
];

const PROTO: &[&str] = &[
    "\nmessage ", "\nservice ", "\nenum ", "\noption ", "\nimport ", "\nsyntax ", "\n\n", "\n",
    " ", "",
];

const PYTHON: &[&str] = &["\nclass ", "\ndef ", "\n\tdef ", "\n\n", "\n", " ", ""];

// Section adornment lines are matched on their first three characters.
const RST: &[&str] = &["\n===", "\n---", "\n***", "\n\n.. ", "\n\n", "\n", " ", ""];

const RUBY: &[&str] = &[
    "\ndef ", "\nclass ", "\nif ", "\nunless ", "\nwhile ", "\nfor ", "\ndo ", "\nbegin ",
    "\nrescue ", "\n\n", "\n", " ", "",
];

const RUST: &[&str] = &[
    "\nfn ", "\nconst ", "\nlet ", "\nif ", "\nwhile ", "\nfor ", "\nloop ", "\nmatch ",
    "\nconst ", "\n\n", "\n", " ", "",
];

const SCALA: &[&str] = &[
    "\nclass ", "\nobject ", "\ndef ", "\nval ", "\nvar ", "\nif ", "\nfor ", "\nwhile ",
    "\nmatch ", "\ncase ", "\n\n", "\n", " ", "",
];

const SWIFT: &[&str] = &[
    "\nfunc ", "\nclass ", "\nstruct ", "\nenum ", "\nif ", "\nfor ", "\nwhile ", "\ndo ",
    "\nswitch ", "\ncase ", "\n\n", "\n", " ", "",
];

const MARKDOWN: &[&str] = &[
    "\n# ", "\n## ", "\n### ", "\n#### ", "\n##### ", "\n###### ", "```\n", "\n***\n",
    "\n---\n", "\n___\n", "\n\n", "\n", " ", "",
];

const LATEX: &[&str] = &[
    "\n\\chapter{",
    "\n\\section{",
    "\n\\subsection{",
    "\n\\subsubsection{",
    "\n\\begin{enumerate}",
    "\n\\begin{itemize}",
    "\n\\begin{description}",
    "\n\\begin{list}",
    "\n\\begin{quote}",
    "\n\\begin{quotation}",
    "\n\\begin{verse}",
    "\n\\begin{verbatim}",
    "\n\\begin{align}",
    "$$",
    "$",
    " ",
    "",
];

const HTML: &[&str] = &[
    "<body", "<div", "<p", "<br", "<li", "<h1", "<h2", "<h3", "<h4", "<h5", "<h6", "<span",
    "<table", "<tr", "<td", "<th", "<ul", "<ol", "<header", "<footer", "<nav", "<head",
    "<style", "<script", "<meta", "<title", "",
];

const SOL: &[&str] = &[
    "\npragma ", "\nusing ", "\ncontract ", "\ninterface ", "\nlibrary ", "\nconstructor ",
    "\ntype ", "\nfunction ", "\nevent ", "\nmodifier ", "\nerror ", "\nstruct ", "\nenum ",
    "\nif ", "\nfor ", "\nwhile ", "\ndo while ", "\nassembly ", "\n\n", "\n", " ", "",
];

const CSHARP: &[&str] = &[
    "\ninterface ", "\nenum ", "\nimplements ", "\ndelegate ", "\nevent ", "\nclass ",
    "\nabstract ", "\npublic ", "\nprotected ", "\nprivate ", "\nstatic ", "\nreturn ", "\nif ",
    "\ncontinue ", "\nfor ", "\nforeach ", "\nwhile ", "\nswitch ", "\nbreak ", "\ncase ",
    "\nelse ", "\ntry ", "\nthrow ", "\nfinally ", "\ncatch ", "\n\n", "\n", " ", "",
];

const COBOL: &[&str] = &[
    "\nIDENTIFICATION DIVISION.",
    "\nENVIRONMENT DIVISION.",
    "\nDATA DIVISION.",
    "\nPROCEDURE DIVISION.",
    "\nWORKING-STORAGE SECTION.",
    "\nLINKAGE SECTION.",
    "\nFILE SECTION.",
    "\nINPUT-OUTPUT SECTION.",
    "\nOPEN ",
    "\nCLOSE ",
    "\nREAD ",
    "\nWRITE ",
    "\nIF ",
    "\nELSE ",
    "\nMOVE ",
    "\nPERFORM ",
    "\nUNTIL ",
    "\nVARYING ",
    "\nACCEPT ",
    "\nDISPLAY ",
    "\nSTOP RUN.",
    "\n",
    " ",
    "",
];

const LUA: &[&str] = &[
    "\nlocal ", "\nfunction ", "\nif ", "\nfor ", "\nwhile ", "\nrepeat ", "\n\n", "\n", " ", "",
];

const PERL: &[&str] = &[
    "\nsub ", "\npackage ", "\nif ", "\nunless ", "\nwhile ", "\nuntil ", "\nfor ", "\nforeach ",
    "\n\n", "\n", " ", "",
];

const HASKELL: &[&str] = &[
    "\nmain :: ", "\nmain = ", "\nlet ", "\nin ", "\ndo ", "\nwhere ", "\n:: ", "\n= ",
    "\ndata ", "\nnewtype ", "\ntype ", "\nmodule ", "\nimport ", "\nqualified ",
    "\nimport qualified ", "\nclass ", "\ninstance ", "\ncase ", "\n| ", "\n= {", "\n, ",
    "\n\n", "\n", " ", "",
];

const ELIXIR: &[&str] = &[
    "\ndef ", "\ndefp ", "\ndefmodule ", "\ndefprotocol ", "\ndefmacro ", "\ndefmacrop ",
    "\nif ", "\nunless ", "\nwhile ", "\ncase ", "\ncond ", "\nwith ", "\nfor ", "\ndo ", "\n\n",
    "\n", " ", "",
];

const POWERSHELL: &[&str] = &[
    "\nfunction ", "\nparam ", "\nif ", "\nforeach ", "\nfor ", "\nwhile ", "\nswitch ",
    "\nclass ", "\ntry ", "\ncatch ", "\nfinally ", "\n\n", "\n", " ", "",
];

impl Language {
    pub const ALL: [Language; 26] = [
        Language::Cpp,
        Language::Go,
        Language::Java,
        Language::Kotlin,
        Language::Js,
        Language::Ts,
        Language::Php,
        Language::Proto,
        Language::Python,
        Language::Rst,
        Language::Ruby,
        Language::Rust,
        Language::Scala,
        Language::Swift,
        Language::Markdown,
        Language::Latex,
        Language::Html,
        Language::Sol,
        Language::CSharp,
        Language::Cobol,
        Language::C,
        Language::Lua,
        Language::Perl,
        Language::Haskell,
        Language::Elixir,
        Language::PowerShell,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Js => "js",
            Language::Ts => "ts",
            Language::Php => "php",
            Language::Proto => "proto",
            Language::Python => "python",
            Language::Rst => "rst",
            Language::Ruby => "ruby",
            Language::Rust => "rust",
            Language::Scala => "scala",
            Language::Swift => "swift",
            Language::Markdown => "markdown",
            Language::Latex => "latex",
            Language::Html => "html",
            Language::Sol => "sol",
            Language::CSharp => "csharp",
            Language::Cobol => "cobol",
            Language::C => "c",
            Language::Lua => "lua",
            Language::Perl => "perl",
            Language::Haskell => "haskell",
            Language::Elixir => "elixir",
            Language::PowerShell => "powershell",
        }
    }

    /// Separators ordered from the preferred boundary to the character-level fallback.
    pub fn separators(self) -> &'static [&'static str] {
        match self {
            Language::Cpp | Language::C => C_FAMILY,
            Language::Go => GO,
            Language::Java => JAVA,
            Language::Kotlin => KOTLIN,
            Language::Js => JS,
            Language::Ts => TS,
            Language::Php => PHP,
            Language::Proto => PROTO,
            Language::Python => PYTHON,
            Language::Rst => RST,
            Language::Ruby => RUBY,
            Language::Rust => RUST,
            Language::Scala => SCALA,
            Language::Swift => SWIFT,
            Language::Markdown => MARKDOWN,
            Language::Latex => LATEX,
            Language::Html => HTML,
            Language::Sol => SOL,
            Language::CSharp => CSHARP,
            Language::Cobol => COBOL,
            Language::Lua => LUA,
            Language::Perl => PERL,
            Language::Haskell => HASKELL,
            Language::Elixir => ELIXIR,
            Language::PowerShell => POWERSHELL,
        }
    }

    /// Maps a file extension (without the dot, any case) to a preset.
    pub fn from_extension(extension: &str) -> Option<Language> {
        let language = match extension.to_ascii_lowercase().as_str() {
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Language::Cpp,
            "c" | "h" => Language::C,
            "go" => Language::Go,
            "java" => Language::Java,
            "kt" | "kts" => Language::Kotlin,
            "js" | "jsx" | "mjs" | "cjs" => Language::Js,
            "ts" | "tsx" | "mts" | "cts" => Language::Ts,
            "php" => Language::Php,
            "proto" => Language::Proto,
            "py" | "pyi" => Language::Python,
            "rst" => Language::Rst,
            "rb" => Language::Ruby,
            "rs" => Language::Rust,
            "scala" | "sc" => Language::Scala,
            "swift" => Language::Swift,
            "md" | "markdown" => Language::Markdown,
            "tex" => Language::Latex,
            "html" | "htm" => Language::Html,
            "sol" => Language::Sol,
            "cs" => Language::CSharp,
            "cbl" | "cob" => Language::Cobol,
            "lua" => Language::Lua,
            "pl" | "pm" => Language::Perl,
            "hs" => Language::Haskell,
            "ex" | "exs" => Language::Elixir,
            "ps1" | "psm1" => Language::PowerShell,
            _ => return None,
        };
        Some(language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = SplitterConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let alias = match normalized.as_str() {
            "c++" => Some(Language::Cpp),
            "javascript" => Some(Language::Js),
            "typescript" => Some(Language::Ts),
            "c#" => Some(Language::CSharp),
            "solidity" => Some(Language::Sol),
            "tex" => Some(Language::Latex),
            _ => None,
        };
        alias
            .or_else(|| {
                Language::ALL
                    .into_iter()
                    .find(|language| language.as_str() == normalized)
            })
            .ok_or_else(|| SplitterConfigError::UnknownLanguage(value.to_string()))
    }
}
