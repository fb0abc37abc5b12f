pub trait Rewriter {
    fn rewrite(&self, input: &str) -> String;
}
