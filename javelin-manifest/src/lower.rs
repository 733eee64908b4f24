//! Lowering of manifest declarations into `javelin-java` constructs.
//!
//! Validation happens here as well: every name is checked and every type
//! string parsed while the construct is built, so a manifest that lowers
//! cleanly is a valid one.

use std::collections::HashSet;

use javelin_java::{
    Annotation, Class, CodeBlock, Constructor, Enum, EnumConstant, Field, Indent, Interface,
    JavaFile, Method, Modifier, Parameter, TypeDecl, TypeName, TypeParam, Visibility,
};
use tracing::trace;

use crate::{
    AnnotationDef, ConstantDef, ConstructorDef, FieldDef, IndentSetting, Manifest, MethodDef,
    ParamDef, Result, TypeDef, TypeKind, manifest::ParseContext, type_syntax::type_param_name,
};

pub(crate) fn lower_manifest<'a>(
    manifest: &'a Manifest,
    ctx: &ParseContext<'a>,
) -> Result<Vec<JavaFile>> {
    ctx.validate_package(&manifest.package)?;
    let indent = lower_indent(manifest.indent.as_ref(), ctx)?;
    ensure_unique(ctx, manifest.types.iter().map(|def| def.name.as_str()), "type")?;

    manifest
        .types
        .iter()
        .map(|def| {
            for import in &def.all_imports() {
                validate_import(import, ctx)?;
            }
            let decl = lower_type(def, ctx, &[])?;
            let mut file = JavaFile::new(&manifest.package, decl)
                .indent(indent)
                .imports(def.all_imports());
            if let Some(header) = &manifest.header {
                file = file.header(header);
            }
            Ok(file)
        })
        .collect()
}

fn lower_indent(setting: Option<&IndentSetting>, ctx: &ParseContext<'_>) -> Result<Indent> {
    match setting {
        None => Ok(Indent::default()),
        Some(IndentSetting::Width(width @ (2 | 4 | 8))) => Ok(Indent::Spaces(*width)),
        Some(IndentSetting::Width(width)) => Err(ctx.source_context().validation_error_at(
            format!("indent width {} is not supported; use 2, 4, 8 or \"tab\"", width),
            ctx.find_key_span("indent"),
        )),
        Some(IndentSetting::Keyword(keyword)) if keyword == "tab" => Ok(Indent::Tab),
        Some(IndentSetting::Keyword(keyword)) => Err(ctx.error_at_value(
            keyword,
            format!("unknown indent '{}'; use 2, 4, 8 or \"tab\"", keyword),
        )),
    }
}

fn validate_import(import: &str, ctx: &ParseContext<'_>) -> Result<()> {
    match ctx.type_name(import, &[], "import")? {
        TypeName::Class(_) => Ok(()),
        _ => Err(ctx.error_at_value(
            import,
            format!("import '{}' must be a fully qualified type name", import),
        )),
    }
}

fn ensure_unique<'n>(
    ctx: &ParseContext<'_>,
    names: impl IntoIterator<Item = &'n str>,
    kind: &str,
) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ctx.error_at_name(
                name,
                format!("duplicate {} '{}'", kind, name),
            ));
        }
    }
    Ok(())
}

/// Parts every declaration kind shares.
struct Preamble<'d> {
    doc: Option<&'d str>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    modifiers: Vec<Modifier>,
    type_params: Vec<TypeParam>,
}

fn lower_type<'a>(
    def: &'a TypeDef,
    parent: &ParseContext<'a>,
    outer_vars: &[String],
) -> Result<TypeDecl> {
    parent.validate_name(&def.name, def.kind.as_str())?;
    let ctx = parent.push(&def.name);
    trace!(name = %def.name, kind = %def.kind, "lowering type");

    check_shape(def, &ctx)?;
    ensure_unique(&ctx, def.fields.iter().map(|f| f.name.as_str()), "field")?;
    ensure_unique(&ctx, def.constants.iter().map(|c| c.name.as_str()), "constant")?;
    ensure_unique(&ctx, def.nested.iter().map(|n| n.name.as_str()), "nested type")?;

    let mut vars = outer_vars.to_vec();
    vars.extend(def.type_params.iter().map(|p| type_param_name(p).to_string()));

    let preamble = Preamble {
        doc: def.doc.as_deref(),
        annotations: lower_annotations(&def.annotations, &ctx)?,
        visibility: ctx.visibility(def.visibility.as_deref(), Visibility::Public)?,
        modifiers: ctx.modifiers(&def.modifiers)?,
        type_params: def
            .type_params
            .iter()
            .map(|p| ctx.type_param(p, &vars))
            .collect::<Result<_>>()?,
    };

    let decl = match def.kind {
        TypeKind::Class => TypeDecl::Class(lower_class(def, preamble, &ctx, &vars)?),
        TypeKind::Interface => TypeDecl::Interface(lower_interface(def, preamble, &ctx, &vars)?),
        TypeKind::Enum => TypeDecl::Enum(lower_enum(def, preamble, &ctx, &vars)?),
    };
    Ok(decl)
}

/// Reject sections that do not exist for the declaration's kind.
fn check_shape(def: &TypeDef, ctx: &ParseContext<'_>) -> Result<()> {
    let problem = match def.kind {
        _ if def.kind != TypeKind::Enum && !def.constants.is_empty() => Some(format!(
            "constants are only allowed on enums, but '{}' is {}",
            def.name,
            article(def.kind)
        )),
        TypeKind::Class if def.extends().len() > 1 => Some(format!(
            "class '{}' can extend only one class",
            def.name
        )),
        TypeKind::Interface if !def.implements.is_empty() => Some(format!(
            "interface '{}' lists its superinterfaces under 'extends', not 'implements'",
            def.name
        )),
        TypeKind::Interface if !def.constructors.is_empty() => Some(format!(
            "interface '{}' cannot declare constructors",
            def.name
        )),
        TypeKind::Enum if !def.extends().is_empty() => Some(format!(
            "enum '{}' cannot extend a class",
            def.name
        )),
        TypeKind::Enum if !def.type_params.is_empty() => Some(format!(
            "enum '{}' cannot declare type parameters",
            def.name
        )),
        _ => None,
    };
    match problem {
        Some(message) => Err(ctx.error_at_name(&def.name, message)),
        None => Ok(()),
    }
}

fn article(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Class => "a class",
        TypeKind::Interface => "an interface",
        TypeKind::Enum => "an enum",
    }
}

fn lower_class<'a>(
    def: &'a TypeDef,
    preamble: Preamble<'_>,
    ctx: &ParseContext<'a>,
    vars: &[String],
) -> Result<Class> {
    let mut class = Class::new(&def.name).visibility(preamble.visibility);
    if let Some(doc) = preamble.doc {
        class = class.doc(doc);
    }
    for annotation in preamble.annotations {
        class = class.annotation(annotation);
    }
    for modifier in preamble.modifiers {
        class = class.modifier(modifier);
    }
    for param in preamble.type_params {
        class = class.type_param(param);
    }
    if let Some(superclass) = def.extends().first() {
        class = class.extends(ctx.type_name(superclass, vars, "superclass")?);
    }
    for interface in &def.implements {
        class = class.implements(ctx.type_name(interface, vars, "implemented interface")?);
    }
    for field in &def.fields {
        class = class.field(lower_field(field, ctx, vars, Visibility::Private)?);
    }
    for (index, constructor) in def.constructors.iter().enumerate() {
        class = class.constructor(lower_constructor(
            constructor,
            ctx,
            vars,
            &def.name,
            this_calls_before(&def.constructors, index),
            Visibility::Public,
        )?);
    }
    for method in &def.methods {
        class = class.method(lower_method(method, ctx, vars, TypeKind::Class)?);
    }
    for nested in &def.nested {
        class = match lower_type(nested, ctx, vars)? {
            TypeDecl::Class(inner) => class.nested_class(inner),
            TypeDecl::Interface(inner) => class.nested_interface(inner),
            TypeDecl::Enum(inner) => class.nested_enum(inner),
        };
    }
    Ok(class)
}

fn lower_interface<'a>(
    def: &'a TypeDef,
    preamble: Preamble<'_>,
    ctx: &ParseContext<'a>,
    vars: &[String],
) -> Result<Interface> {
    let mut interface = Interface::new(&def.name).visibility(preamble.visibility);
    if let Some(doc) = preamble.doc {
        interface = interface.doc(doc);
    }
    for annotation in preamble.annotations {
        interface = interface.annotation(annotation);
    }
    for modifier in preamble.modifiers {
        interface = interface.modifier(modifier);
    }
    for param in preamble.type_params {
        interface = interface.type_param(param);
    }
    for parent in def.extends() {
        interface = interface.extends(ctx.type_name(parent, vars, "superinterface")?);
    }
    // Interface fields are implicitly public, static and final.
    for field in &def.fields {
        interface =
            interface.constant(lower_field(field, ctx, vars, Visibility::PackagePrivate)?);
    }
    for method in &def.methods {
        interface = interface.method(lower_method(method, ctx, vars, TypeKind::Interface)?);
    }
    for nested in &def.nested {
        interface = match lower_type(nested, ctx, vars)? {
            TypeDecl::Class(inner) => interface.nested_class(inner),
            TypeDecl::Interface(inner) => interface.nested_interface(inner),
            TypeDecl::Enum(inner) => interface.nested_enum(inner),
        };
    }
    Ok(interface)
}

fn lower_enum<'a>(
    def: &'a TypeDef,
    preamble: Preamble<'_>,
    ctx: &ParseContext<'a>,
    vars: &[String],
) -> Result<Enum> {
    let mut lowered = Enum::new(&def.name).visibility(preamble.visibility);
    if let Some(doc) = preamble.doc {
        lowered = lowered.doc(doc);
    }
    for annotation in preamble.annotations {
        lowered = lowered.annotation(annotation);
    }
    for modifier in preamble.modifiers {
        lowered = lowered.modifier(modifier);
    }
    for interface in &def.implements {
        lowered = lowered.implements(ctx.type_name(interface, vars, "implemented interface")?);
    }
    for constant in &def.constants {
        lowered = lowered.constant(lower_constant(constant, ctx)?);
    }
    for field in &def.fields {
        lowered = lowered.field(lower_field(field, ctx, vars, Visibility::Private)?);
    }
    // Enum constructors cannot be public; leave the keyword off unless asked.
    for (index, constructor) in def.constructors.iter().enumerate() {
        lowered = lowered.constructor(lower_constructor(
            constructor,
            ctx,
            vars,
            &def.name,
            this_calls_before(&def.constructors, index),
            Visibility::PackagePrivate,
        )?);
    }
    for method in &def.methods {
        lowered = lowered.method(lower_method(method, ctx, vars, TypeKind::Enum)?);
    }
    for nested in &def.nested {
        lowered = match lower_type(nested, ctx, vars)? {
            TypeDecl::Class(inner) => lowered.nested_class(inner),
            TypeDecl::Interface(inner) => lowered.nested_interface(inner),
            TypeDecl::Enum(inner) => lowered.nested_enum(inner),
        };
    }
    Ok(lowered)
}

fn lower_annotations(defs: &[AnnotationDef], ctx: &ParseContext<'_>) -> Result<Vec<Annotation>> {
    defs.iter().map(|def| lower_annotation(def, ctx)).collect()
}

fn lower_annotation(def: &AnnotationDef, ctx: &ParseContext<'_>) -> Result<Annotation> {
    let written = def.type_name();
    let ty = written.strip_prefix('@').unwrap_or(written);
    let mut annotation = match ctx.type_name(ty, &[], "annotation")? {
        TypeName::Class(reference) => Annotation::new(reference),
        TypeName::Builtin(name) => Annotation::named(name),
        _ => {
            return Err(ctx.error_at_value(
                written,
                format!("'{}' is not an annotation type", written),
            ));
        }
    };

    if let AnnotationDef::Full { value, members, .. } = def {
        if let Some(value) = value {
            annotation = annotation.value(value);
        }
        for (name, value) in members {
            ctx.validate_name(name, "annotation member")?;
            annotation = annotation.member(name, value);
        }
    }
    Ok(annotation)
}

fn lower_field(
    def: &FieldDef,
    ctx: &ParseContext<'_>,
    vars: &[String],
    default_visibility: Visibility,
) -> Result<Field> {
    ctx.validate_name(&def.name, "field")?;
    let ty = ctx.type_name(&def.ty, vars, "field")?;
    let mut field = Field::new(ty, &def.name)
        .visibility(ctx.visibility(def.visibility.as_deref(), default_visibility)?);
    for modifier in ctx.modifiers(&def.modifiers)? {
        field = field.modifier(modifier);
    }
    if let Some(doc) = &def.doc {
        field = field.doc(doc);
    }
    if let Some(initializer) = &def.initializer {
        field = field.initializer(initializer);
    }
    for annotation in lower_annotations(&def.annotations, ctx)? {
        field = field.annotation(annotation);
    }
    Ok(field)
}

fn lower_params(
    defs: &[ParamDef],
    ctx: &ParseContext<'_>,
    vars: &[String],
) -> Result<Vec<Parameter>> {
    ensure_unique(ctx, defs.iter().map(|p| p.name.as_str()), "parameter")?;
    let leading = defs.split_last().map_or(&[][..], |(_, leading)| leading);
    if let Some(varargs) = leading.iter().find(|p| p.varargs) {
        return Err(ctx.error_at_name(
            &varargs.name,
            format!("only the last parameter can be varargs, not '{}'", varargs.name),
        ));
    }

    defs.iter()
        .map(|def| {
            ctx.validate_name(&def.name, "parameter")?;
            let mut param = Parameter::new(ctx.type_name(&def.ty, vars, "parameter")?, &def.name);
            if let Some(doc) = &def.doc {
                param = param.doc(doc);
            }
            for annotation in lower_annotations(&def.annotations, ctx)? {
                param = param.annotation(annotation);
            }
            if def.is_final {
                param = param.final_();
            }
            if def.varargs {
                param = param.varargs();
            }
            Ok(param)
        })
        .collect()
}

fn lower_throws(
    throws: &[String],
    ctx: &ParseContext<'_>,
    vars: &[String],
) -> Result<Vec<TypeName>> {
    throws
        .iter()
        .map(|ty| ctx.type_name(ty, vars, "throws clause"))
        .collect()
}

fn lower_constructor(
    def: &ConstructorDef,
    ctx: &ParseContext<'_>,
    vars: &[String],
    owner: &str,
    earlier_this_calls: usize,
    default_visibility: Visibility,
) -> Result<Constructor> {
    let mut constructor = Constructor::new()
        .named(owner)
        .visibility(ctx.visibility(def.visibility.as_deref(), default_visibility)?);

    match (&def.super_args, &def.this_args) {
        (Some(_), Some(_)) => {
            // Skip the `this_args` keys of earlier constructors of the same type.
            let from = ctx.find_span(owner).map_or(0, |span| span.offset());
            let span = ctx
                .find_key_span_from("this_args", from, earlier_this_calls)
                .or_else(|| ctx.find_key_span_from("this_args", 0, earlier_this_calls));
            return Err(ctx
                .source_context()
                .conflicting_delegation_error(owner, span));
        }
        (Some(args), None) => constructor = constructor.super_call(args),
        (None, Some(args)) => constructor = constructor.this_call(args),
        (None, None) => {}
    }

    if let Some(doc) = &def.doc {
        constructor = constructor.doc(doc);
    }
    for annotation in lower_annotations(&def.annotations, ctx)? {
        constructor = constructor.annotation(annotation);
    }
    for param in lower_params(&def.params, ctx, vars)? {
        constructor = constructor.param(param);
    }
    for ty in lower_throws(&def.throws, ctx, vars)? {
        constructor = constructor.throws(ty);
    }
    if let Some(body) = &def.body {
        constructor = constructor.body(CodeBlock::new().lines(body));
    }
    Ok(constructor)
}

/// Constructors before `index` that delegate with `this(...)`.
fn this_calls_before(constructors: &[ConstructorDef], index: usize) -> usize {
    constructors[..index]
        .iter()
        .filter(|constructor| constructor.this_args.is_some())
        .count()
}

fn lower_method<'a>(
    def: &'a MethodDef,
    parent: &ParseContext<'a>,
    outer_vars: &[String],
    owner: TypeKind,
) -> Result<Method> {
    parent.validate_name(&def.name, "method")?;
    let ctx = parent.push(&def.name);

    let mut vars = outer_vars.to_vec();
    vars.extend(def.type_params.iter().map(|p| type_param_name(p).to_string()));

    // Interface methods are implicitly public.
    let default_visibility = match owner {
        TypeKind::Interface => Visibility::PackagePrivate,
        TypeKind::Class | TypeKind::Enum => Visibility::Public,
    };
    let modifiers = ctx.modifiers(&def.modifiers)?;

    let mut method = Method::new(&def.name)
        .visibility(ctx.visibility(def.visibility.as_deref(), default_visibility)?);
    for modifier in &modifiers {
        method = method.modifier(*modifier);
    }
    for param in &def.type_params {
        method = method.type_param(ctx.type_param(param, &vars)?);
    }
    if let Some(returns) = &def.returns {
        method = method.returns(ctx.type_name(returns, &vars, "return type")?);
    }
    if let Some(doc) = &def.doc {
        method = method.doc(doc);
    }
    if let Some(doc) = &def.returns_doc {
        method = method.returns_doc(doc);
    }
    for annotation in lower_annotations(&def.annotations, &ctx)? {
        method = method.annotation(annotation);
    }
    for param in lower_params(&def.params, &ctx, &vars)? {
        method = method.param(param);
    }
    for ty in lower_throws(&def.throws, &ctx, &vars)? {
        method = method.throws(ty);
    }

    let has = |modifier| modifiers.contains(&modifier);
    let declaration_only = has(Modifier::Abstract)
        || has(Modifier::Native)
        || (owner == TypeKind::Interface && !has(Modifier::Default) && !has(Modifier::Static));

    match &def.body {
        Some(_) if has(Modifier::Abstract) || has(Modifier::Native) => {
            return Err(parent.error_at_name(
                &def.name,
                format!("method '{}' is abstract or native and cannot have a body", def.name),
            ));
        }
        Some(body) => method = method.body(CodeBlock::new().lines(body)),
        None if declaration_only => {}
        None => method = method.body(CodeBlock::new()),
    }
    Ok(method)
}

fn lower_constant(def: &ConstantDef, ctx: &ParseContext<'_>) -> Result<EnumConstant> {
    ctx.validate_name(&def.name, "enum constant")?;
    let mut constant = EnumConstant::new(&def.name);
    if let Some(doc) = &def.doc {
        constant = constant.doc(doc);
    }
    for annotation in lower_annotations(&def.annotations, ctx)? {
        constant = constant.annotation(annotation);
    }
    for arg in &def.args {
        constant = constant.arg(arg);
    }
    Ok(constant)
}
