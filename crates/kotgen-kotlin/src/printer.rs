//! Renders a `KtFile` to Kotlin source text.
//!
//! Top-level functions and variables get `definedExternally` bodies;
//! interface members are body-less and omit a `Unit` return type.

use crate::ast::{
    CallSignature, KtDeclaration, KtFile, KtFunction, KtMember, KtTrait, KtVariable, TypeParam,
    UNIT,
};

const INDENT: &str = "    ";

pub struct Printer {
    out: String,
    indent: usize,
    at_line_start: bool,
}

impl Printer {
    pub fn new() -> Printer {
        Printer {
            out: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        if self.at_line_start {
            for _ in 0..self.indent {
                self.out.push_str(INDENT);
            }
            self.at_line_start = false;
        }
        self.out.push_str(text);
    }

    fn write_line(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }

    pub fn print_file(&mut self, file: &KtFile) {
        if let Some(package_name) = &file.package_name {
            self.write("package ");
            self.write(package_name);
            self.write_line();
            self.write_line();
        }
        for declaration in &file.declarations {
            self.print_declaration(declaration);
        }
    }

    fn print_declaration(&mut self, declaration: &KtDeclaration) {
        match declaration {
            KtDeclaration::Function(function) => self.print_function(function),
            KtDeclaration::Variable(variable) => self.print_variable(variable),
            KtDeclaration::Trait(kt_trait) => self.print_trait(kt_trait),
        }
    }

    fn print_function(&mut self, function: &KtFunction) {
        self.write("fun ");
        self.print_type_params(function.signature.type_params.as_deref());
        self.write(&function.name);
        self.print_params(&function.signature);
        self.write(": ");
        self.write(&function.signature.return_type.to_string());
        self.write(" = definedExternally");
        self.write_line();
    }

    fn print_variable(&mut self, variable: &KtVariable) {
        self.write(if variable.is_var { "var " } else { "val " });
        self.write(&variable.name);
        self.write(": ");
        self.write(&variable.type_annotation.to_string());
        self.write(" = definedExternally");
        self.write_line();
    }

    fn print_trait(&mut self, kt_trait: &KtTrait) {
        self.write("interface ");
        self.write(&kt_trait.name);
        if let Some(type_params) = &kt_trait.type_params {
            self.write(&format_type_param_list(type_params));
        }
        if kt_trait.members.is_empty() {
            self.write(" {}");
            self.write_line();
            return;
        }
        self.write(" {");
        self.write_line();
        self.indent += 1;
        for member in &kt_trait.members {
            self.print_member(member);
        }
        self.indent -= 1;
        self.write("}");
        self.write_line();
    }

    fn print_member(&mut self, member: &KtMember) {
        match member {
            KtMember::Function { name, signature } => {
                self.write("fun ");
                self.print_type_params(signature.type_params.as_deref());
                self.write(name);
                self.print_params(signature);
                // `fun baz()` rather than `fun baz(): Unit`
                if signature.return_type.type_name != UNIT
                    || signature.return_type.is_nullable
                {
                    self.write(": ");
                    self.write(&signature.return_type.to_string());
                }
                self.write_line();
            }
            KtMember::Property {
                name,
                type_annotation,
                is_var,
            } => {
                self.write(if *is_var { "var " } else { "val " });
                self.write(name);
                self.write(": ");
                self.write(&type_annotation.to_string());
                self.write_line();
            }
        }
    }

    fn print_type_params(&mut self, type_params: Option<&[TypeParam]>) {
        if let Some(type_params) = type_params {
            self.write(&format_type_param_list(type_params));
            self.write(" ");
        }
    }

    fn print_params(&mut self, signature: &CallSignature) {
        self.write("(");
        let rendered: Vec<String> = signature
            .params
            .iter()
            .map(|param| param.to_string())
            .collect();
        self.write(&rendered.join(", "));
        self.write(")");
    }
}

fn format_type_param_list(type_params: &[TypeParam]) -> String {
    let rendered: Vec<String> = type_params.iter().map(|tp| tp.to_string()).collect();
    format!("<{}>", rendered.join(", "))
}

/// Render a whole file in one call.
pub fn render_file(file: &KtFile) -> String {
    let mut printer = Printer::new();
    printer.print_file(file);
    printer.finish()
}
