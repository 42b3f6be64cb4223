//! Go function builder.

use quickimmut_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Go function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            variadic: false,
        }
    }

    /// A trailing `name ...ty` parameter.
    pub fn variadic(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            variadic: true,
            ..Self::new(name, ty)
        }
    }

    fn render(&self) -> String {
        if self.variadic {
            format!("{} ...{}", self.name, self.ty)
        } else {
            format!("{} {}", self.name, self.ty)
        }
    }
}

/// The receiver of a Go method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receiver {
    /// Unnamed value receiver, `(T)`: the type only serves as a namespace.
    Value(String),
    /// Named pointer receiver, `(b *T)`.
    Pointer { name: String, ty: String },
}

impl Receiver {
    pub fn value(ty: impl Into<String>) -> Self {
        Self::Value(ty.into())
    }

    pub fn pointer(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::Pointer {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Value(ty) => format!("({})", ty),
            Self::Pointer { name, ty } => format!("({} *{})", name, ty),
        }
    }
}

/// Builder for Go functions and methods.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    receiver: Option<Receiver>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    /// Declare the function as a method on `receiver`.
    pub fn receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Declare as a method when `receiver` is set, a free function otherwise.
    pub fn maybe_receiver(mut self, receiver: Option<Receiver>) -> Self {
        self.receiver = receiver;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a nested block (e.g., a `for` loop) to the function body.
    pub fn body_block<I, S>(mut self, header: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = lines.into_iter().map(CodeFragment::line).collect();
        self.body
            .push(CodeFragment::block(header, body, Some("}".to_string())));
        self
    }

    fn signature(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("{} ", r.render()))
            .unwrap_or_default();

        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!("func {}{}({}) {} {{", receiver, self.name, params, ret),
            None => format!("func {}{}({}) {{", receiver, self.name, params),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        CodeBuilder::go().node(self).build()
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.signature(),
            self.body.clone(),
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = Func::new("greet").build();
        assert_eq!(f, "func greet() {\n}\n");
    }

    #[test]
    fn test_fn_with_params() {
        let f = Func::new("MakeKeyValuMapEntry")
            .param(Param::new("k", "key"))
            .param(Param::new("v", "*Valu"))
            .returns("keyValuEntry")
            .body_line("return keyValuEntry{k, v}")
            .build();
        assert_eq!(
            f,
            "func MakeKeyValuMapEntry(k key, v *Valu) keyValuEntry {\n\treturn keyValuEntry{k, v}\n}\n"
        );
    }

    #[test]
    fn test_variadic_param() {
        let f = Func::new("MakeValuList")
            .param(Param::variadic("ents", "Valu"))
            .returns("valuList")
            .build();
        assert!(f.starts_with("func MakeValuList(ents ...Valu) valuList {"));
    }

    #[test]
    fn test_value_receiver() {
        let f = Func::new("StartValuList")
            .receiver(Receiver::value("GroupingType"))
            .build();
        assert!(f.starts_with("func (GroupingType) StartValuList() {"));
    }

    #[test]
    fn test_pointer_receiver() {
        let f = Func::new("Append")
            .receiver(Receiver::pointer("b", "valuListBuilder"))
            .param(Param::new("v", "Valu"))
            .build();
        assert!(f.starts_with("func (b *valuListBuilder) Append(v Valu) {"));
    }

    #[test]
    fn test_maybe_receiver_none_is_free_function() {
        let f = Func::new("StartValuList").maybe_receiver(None).build();
        assert!(f.starts_with("func StartValuList() {"));
    }

    #[test]
    fn test_body_block() {
        let f = Func::new("fill")
            .body_block("for _, y := range ents {", ["x[y.k] = y.v"])
            .body_line("return")
            .build();
        assert_eq!(
            f,
            "func fill() {\n\tfor _, y := range ents {\n\t\tx[y.k] = y.v\n\t}\n\treturn\n}\n"
        );
    }
}
