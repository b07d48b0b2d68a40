//! C code generator.
//!
//! This module provides the `CGenerator` which emits a standalone C program
//! that parses the inferred arguments with `getopt_long`. Every argument
//! becomes a static global initialised to its default value.

use crate::inference::{ArgType, Descriptor, DescriptorKind, ReservedWords, WordList};

use super::generator::{
    CodeGenerator, GenerateOptions, SpecialFloat, int_literal, provenance, special_float,
};

/// C11 keywords plus identifiers declared or used by the generated program.
const C_RESERVED: WordList = WordList(&[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic",
    "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local", "bool", "true", "false", "NULL", "main", "argc", "argv", "optarg",
    "optind", "opterr", "optopt", "long_options", "print_usage", "parse_args",
    "is_valid_choice", "endptr", "ch", "ret",
    // stdio.h
    "printf", "fprintf", "sprintf", "snprintf", "puts", "putchar", "getchar", "gets", "fgets",
    "fopen", "fclose", "fread", "fwrite", "fflush", "remove", "rename", "perror", "stdin",
    "stdout", "stderr", "scanf", "sscanf", "tmpfile", "tmpnam", "EOF", "FILE",
    // stdlib.h
    "abort", "abs", "atexit", "atof", "atoi", "atol", "calloc", "div", "exit", "free",
    "getenv", "labs", "malloc", "qsort", "bsearch", "rand", "random", "realloc", "srand",
    "strtod", "strtof", "strtol", "strtoul", "system",
    // string.h and strings.h
    "index", "rindex", "memchr", "memcmp", "memcpy", "memmove", "memset", "strcat",
    "strchr", "strcmp", "strcpy", "strdup", "strerror", "strlen", "strncat", "strncmp",
    "strncpy", "strrchr", "strstr", "strtok", "bcopy", "bzero",
    // getopt.h
    "getopt", "getopt_long", "option", "no_argument", "required_argument",
    "optional_argument",
    // math.h
    "INFINITY", "NAN", "sin", "cos", "tan", "log", "exp", "pow", "sqrt", "floor", "ceil",
    "round", "fabs", "y0", "y1", "j0", "j1", "gamma",
]);

const IS_VALID_CHOICE: &str = r#"static bool is_valid_choice(const char *value, const char *choices[], size_t count)
{
    for (size_t i = 0; i < count; i++)
    {
        if (0 == strcmp(value, choices[i]))
        {
            return true;
        }
    }

    return false;
}
"#;

/// Generator for C programs using `getopt_long`.
pub struct CGenerator;

impl CodeGenerator for CGenerator {
    fn generate(
        &self,
        descriptors: &[Descriptor],
        invocation: &[String],
        options: GenerateOptions,
    ) -> String {
        let mut out = String::new();

        if options.comment {
            let [title, args] = provenance(invocation);
            out.push_str(&format!(
                "/* {}\n * {}\n */\n\n",
                title,
                args.replace("*/", "* /")
            ));
        }

        out.push_str(&includes(descriptors));
        out.push('\n');
        out.push_str(&long_options(descriptors));
        out.push('\n');
        out.push_str(&globals(descriptors));
        out.push('\n');

        if descriptors.iter().any(|d| d.choices.is_some()) {
            out.push_str(IS_VALID_CHOICE);
            out.push('\n');
        }

        out.push_str(&print_usage(descriptors));
        out.push('\n');
        out.push_str(&parse_args(descriptors));
        out.push('\n');
        out.push_str(&main_function(descriptors, options.print_values));
        out
    }

    fn reserved_words(&self) -> &dyn ReservedWords {
        &C_RESERVED
    }

    fn extension(&self) -> &'static str {
        "c"
    }
}

/// Escapes a value for use inside a C string literal.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a value for use inside a `printf` format string.
fn escape_format(value: &str) -> String {
    escape(value).replace('%', "%%")
}

/// Indents every non-empty line of `block` by `spaces`.
fn indent(block: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{}{}\n", pad, line)
            }
        })
        .collect()
}

fn short_char(descriptor: &Descriptor) -> Option<char> {
    descriptor.short_flag.as_deref().and_then(|s| s.chars().nth(1))
}

fn positionals(descriptors: &[Descriptor]) -> impl Iterator<Item = &Descriptor> {
    descriptors.iter().filter(|d| d.is_positional())
}

fn options(descriptors: &[Descriptor]) -> impl Iterator<Item = &Descriptor> {
    descriptors.iter().filter(|d| !d.is_positional())
}

fn float_literal(value: &str) -> String {
    match special_float(value) {
        Some(SpecialFloat::Infinity { negative: true }) => "-INFINITY".to_string(),
        Some(SpecialFloat::Infinity { negative: false }) => "INFINITY".to_string(),
        Some(SpecialFloat::NaN) => "NAN".to_string(),
        None => format!("{}f", value),
    }
}

fn needs_math(descriptors: &[Descriptor]) -> bool {
    options(descriptors).any(|d| {
        d.arg_type == Some(ArgType::Float)
            && d.default_value().and_then(special_float).is_some()
    })
}

fn includes(descriptors: &[Descriptor]) -> String {
    let mut headers = vec!["stdbool.h", "getopt.h", "stdlib.h", "stdio.h", "string.h"];
    if needs_math(descriptors) {
        headers.push("math.h");
    }

    headers
        .into_iter()
        .map(|h| format!("#include <{}>\n", h))
        .collect()
}

fn long_options(descriptors: &[Descriptor]) -> String {
    let mut out = String::from("static struct option long_options[] = {\n");

    for descriptor in options(descriptors) {
        let (Some(long), Some(short)) = (&descriptor.long_flag, short_char(descriptor)) else {
            continue;
        };
        let has_arg = if descriptor.is_option() {
            "required_argument"
        } else {
            "no_argument"
        };
        out.push_str(&format!(
            "    {{\"{}\", {}, NULL, '{}'}},\n",
            escape(long.trim_start_matches('-')),
            has_arg,
            short
        ));
    }

    out.push_str("    {NULL, 0, NULL, 0}\n};\n");
    out
}

/// Declaration of the static global holding one argument.
fn global(descriptor: &Descriptor) -> String {
    let name = &descriptor.var_name;
    let default = if descriptor.is_positional() {
        None
    } else {
        descriptor.default_value()
    };

    match descriptor.arg_type {
        None => format!("static bool {} = false;\n", name),
        Some(ArgType::Integer) => format!(
            "static long int {} = {};\n",
            name,
            default.map(int_literal).unwrap_or_else(|| "0".to_string())
        ),
        Some(ArgType::Float) => format!(
            "static float {} = {};\n",
            name,
            default.map(float_literal).unwrap_or_else(|| "0.0f".to_string())
        ),
        Some(ArgType::FilePath) | Some(ArgType::String) => {
            let value = default
                .map(|v| format!("\"{}\"", escape(v)))
                .unwrap_or_else(|| "NULL".to_string());
            let mut decl = format!("static const char *{} = {};\n", name, value);
            if let Some(choices) = &descriptor.choices {
                let quoted: Vec<String> =
                    choices.iter().map(|c| format!("\"{}\"", escape(c))).collect();
                decl.push_str(&format!(
                    "static const char *{}_choices[] = {{{}}};\n",
                    name,
                    quoted.join(", ")
                ));
            }
            decl
        }
    }
}

fn globals(descriptors: &[Descriptor]) -> String {
    descriptors.iter().map(global).collect()
}

/// Left-hand column of a usage line, e.g. `-i --intval [int]`.
fn usage_label(descriptor: &Descriptor) -> String {
    let mut label = descriptor.option_names().join(" ");
    if let Some(arg_type) = descriptor.arg_type {
        label.push_str(&format!(" [{}]", arg_type.placeholder()));
    }
    label
}

fn usage_help(descriptor: &Descriptor) -> String {
    match descriptor.default_value() {
        Some(default) if descriptor.is_option() => {
            format!("{} (default: {})", descriptor.help_text(), default)
        }
        _ => descriptor.help_text(),
    }
}

fn usage_section(heading: &str, rows: &[(String, String)]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut out = format!("    printf(\"\\n{}:\\n\\n\");\n", heading);
    for (label, help) in rows {
        let line = format!("{:<width$}    {}", label, help, width = width);
        out.push_str(&format!("    printf(\"{}\\n\");\n", escape_format(&line)));
    }
    out
}

fn print_usage(descriptors: &[Descriptor]) -> String {
    let mut synopsis = String::new();
    if options(descriptors).next().is_some() {
        synopsis.push_str(" [OPTIONS]");
    }
    for descriptor in positionals(descriptors) {
        synopsis.push(' ');
        synopsis.push_str(&descriptor.var_name);
    }

    let option_rows: Vec<_> = options(descriptors)
        .map(|d| (usage_label(d), usage_help(d)))
        .collect();
    let positional_rows: Vec<_> = positionals(descriptors)
        .map(|d| (d.var_name.clone(), usage_help(d)))
        .collect();

    let mut out = String::from("static void print_usage(const char *program)\n{\n");
    out.push_str("    printf(\"\\n\");\n");
    out.push_str("    printf(\"USAGE:\\n\\n\");\n");
    out.push_str(&format!(
        "    printf(\"%s{}\\n\", program);\n",
        escape_format(&synopsis)
    ));
    out.push_str(&usage_section("OPTIONS", &option_rows));
    out.push_str(&usage_section("POSITIONAL ARGUMENTS", &positional_rows));
    out.push_str("    printf(\"\\n\");\n}\n");
    out
}

/// Statements that store `source` into the descriptor's global, validating
/// numeric input and choices. `label` names the argument in error messages.
fn conversion(descriptor: &Descriptor, source: &str, label: &str) -> String {
    let name = &descriptor.var_name;
    let label = escape_format(label);

    let numeric = |call: &str, what: &str| {
        format!(
            "{name} = {call}({source}, &endptr{base});\n\
             if (endptr && (*endptr != '\\0'))\n\
             {{\n    printf(\"{label} requires {what} argument\\n\");\n    return -1;\n}}\n",
            base = if call == "strtol" { ", 0" } else { "" },
        )
    };

    match descriptor.arg_type {
        None => format!("{} = true;\n", name),
        Some(ArgType::Integer) => numeric("strtol", "an integer"),
        Some(ArgType::Float) => numeric("strtof", "a floating-point"),
        Some(ArgType::FilePath) | Some(ArgType::String) => {
            let mut out = format!("{} = {};\n", name, source);
            if let Some(choices) = &descriptor.choices {
                out.push_str(&format!(
                    "if (!is_valid_choice({name}, {name}_choices, sizeof({name}_choices) / sizeof({name}_choices[0])))\n\
                     {{\n    printf(\"{label} must be one of: {}\\n\");\n    return -1;\n}}\n",
                    escape_format(&choices.join(", ")),
                ));
            }
            out
        }
    }
}

fn needs_endptr(descriptors: &[Descriptor]) -> bool {
    descriptors
        .iter()
        .any(|d| matches!(d.arg_type, Some(ArgType::Integer) | Some(ArgType::Float)))
}

fn parse_args(descriptors: &[Descriptor]) -> String {
    let mut optstring = String::new();
    for descriptor in options(descriptors) {
        if let Some(short) = short_char(descriptor) {
            optstring.push(short);
            if descriptor.kind() == Some(DescriptorKind::Option) {
                optstring.push(':');
            }
        }
    }

    let mut out = String::from("int parse_args(int argc, char *argv[])\n{\n");
    if needs_endptr(descriptors) {
        out.push_str("    char *endptr = NULL;\n");
    }
    out.push_str("    int ch;\n\n");
    out.push_str(&format!(
        "    while ((ch = getopt_long(argc, argv, \"{}\", long_options, NULL)) != -1)\n",
        optstring
    ));
    out.push_str("    {\n        switch (ch)\n        {\n");

    for descriptor in options(descriptors) {
        let Some(short) = short_char(descriptor) else {
            continue;
        };
        let label = format!("Option '-{}'", short);
        out.push_str(&format!("            case '{}':\n            {{\n", short));
        out.push_str(&indent(&conversion(descriptor, "optarg", &label), 16));
        out.push_str("                break;\n            }\n");
    }

    out.push_str(
        "            default:\n            {\n                print_usage(argv[0]);\n                return -1;\n            }\n",
    );
    out.push_str("        }\n    }\n\n");

    let positional: Vec<&Descriptor> = positionals(descriptors).collect();
    if !positional.is_empty() {
        out.push_str(&format!(
            "    if (argc < (optind + {}))\n    {{\n        printf(\"Missing positional arguments\\n\");\n        print_usage(argv[0]);\n        return -1;\n    }}\n\n",
            positional.len()
        ));

        for descriptor in positional {
            let label = format!("Argument '{}'", descriptor.var_name);
            out.push_str(&indent(&conversion(descriptor, "argv[optind]", &label), 4));
            out.push_str("    optind++;\n\n");
        }
    }

    out.push_str("    return 0;\n}\n");
    out
}

/// `printf` statement showing the parsed value of one argument.
fn print_value(descriptor: &Descriptor) -> String {
    let name = &descriptor.var_name;
    match descriptor.arg_type {
        None => format!("printf(\"{name}: %s\\n\", {name} ? \"true\" : \"false\");\n"),
        Some(ArgType::Integer) => format!("printf(\"{name}: %ld\\n\", {name});\n"),
        Some(ArgType::Float) => format!("printf(\"{name}: %f\\n\", {name});\n"),
        Some(ArgType::FilePath) | Some(ArgType::String) => {
            format!("printf(\"{name}: %s\\n\", {name} ? {name} : \"(null)\");\n")
        }
    }
}

fn main_function(descriptors: &[Descriptor], print_values: bool) -> String {
    let mut out = String::from("int main(int argc, char *argv[])\n{\n");
    if !descriptors.is_empty() {
        out.push_str("    if (argc < 2)\n    {\n        print_usage(argv[0]);\n        return -1;\n    }\n\n");
    }
    out.push_str("    int ret = parse_args(argc, argv);\n");
    out.push_str("    if (0 != ret)\n    {\n        return ret;\n    }\n\n");

    if print_values && !descriptors.is_empty() {
        for descriptor in descriptors {
            out.push_str(&indent(&print_value(descriptor), 4));
        }
        out.push('\n');
    }

    out.push_str("    return 0;\n}\n");
    out
}
