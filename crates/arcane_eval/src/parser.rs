//! Recursive-descent parser (`spec.md` §4.3, §4.5).
//!
//! A single pass over the whole token stream, building a retained AST
//! instead of interpreting as it goes (`spec.md` §9 REDESIGN FLAGS): the
//! precedence cascade below mirrors the table in `spec.md` §4.3 level for
//! level, but each procedure returns an `ExprId` into an `ExprArena` rather
//! than a computed `Value`.

use arcane_ir::{
    AssignOp, BinaryOp, ExprArena, ExprId, ExprKind, IncDecOp, Name, Span, StmtId, StmtKind, Token,
    TokenKind, UnaryOp,
};

use crate::errors::EvalError;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            arena: ExprArena::new(),
        }
    }

    /// Parse the whole token stream into a top-level statement sequence.
    pub fn parse_program(mut self) -> Result<(Vec<StmtId>, ExprArena), EvalError> {
        let mut stmts = Vec::new();
        while self.peek().kind != TokenKind::Eof {
            stmts.push(self.parse_statement()?);
        }
        Ok((stmts, self.arena))
    }

    fn peek(&self) -> Token {
        self.tokens[self.pos]
    }

    fn peek_at(&self, offset: usize) -> Option<Token> {
        self.tokens.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Token {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, EvalError> {
        let token = self.peek();
        if token.kind == kind {
            Ok(self.advance())
        } else {
            Err(EvalError::unexpected_token(
                format!("expected {kind}, found {}", token.kind),
                token.span,
            ))
        }
    }

    fn expect_ident(&mut self) -> Result<(Name, Span), EvalError> {
        match self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok((name, span))
            }
            other => Err(EvalError::unexpected_token(
                format!("expected identifier, found {other}"),
                self.peek().span,
            )),
        }
    }

    // ---- statements --------------------------------------------------

    fn parse_statement(&mut self) -> Result<StmtId, EvalError> {
        match self.peek().kind {
            TokenKind::Return => self.parse_return(),
            TokenKind::If => self.parse_if(),
            TokenKind::For => self.parse_for(),
            TokenKind::While => self.parse_while(),
            TokenKind::Break => {
                let tok = self.advance();
                let end = self.expect(TokenKind::Semicolon)?.span;
                Ok(self.arena.alloc_stmt(StmtKind::Break, tok.span.to(end)))
            }
            TokenKind::Continue => {
                let tok = self.advance();
                let end = self.expect(TokenKind::Semicolon)?.span;
                Ok(self.arena.alloc_stmt(StmtKind::Continue, tok.span.to(end)))
            }
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_block(&mut self) -> Result<Vec<StmtId>, EvalError> {
        self.expect(TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while self.peek().kind != TokenKind::RBrace && self.peek().kind != TokenKind::Eof {
            stmts.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(stmts)
    }

    fn parse_return(&mut self) -> Result<StmtId, EvalError> {
        let start = self.advance().span;
        let expr = self.parse_expression()?;
        let end = self.expect(TokenKind::Semicolon)?.span;
        Ok(self.arena.alloc_stmt(StmtKind::Return(expr), start.to(end)))
    }

    /// `if (c1) b1 [else if (c2) b2]* [else be]` (`spec.md` §4.5). Every
    /// branch's condition and block are parsed, in source order, into one
    /// `branches` list plus an optional `else_branch` — the "stop at the
    /// first truthy branch" rule is then purely a property of how the
    /// evaluator walks this list (`spec.md` §9 Open Question, resolved).
    fn parse_if(&mut self) -> Result<StmtId, EvalError> {
        let start = self.peek().span;
        let mut branches = Vec::new();
        branches.push(self.parse_if_head()?);

        let mut else_branch = None;
        while self.peek().kind == TokenKind::Else {
            self.advance();
            if self.peek().kind == TokenKind::If {
                self.advance();
                branches.push(self.parse_condition_and_block()?);
            } else {
                else_branch = Some(self.parse_block()?);
                break;
            }
        }

        let last_stmt = else_branch
            .as_ref()
            .and_then(|block| block.last())
            .or_else(|| branches.last().and_then(|(_, block)| block.last()));
        let end = last_stmt.map_or(start, |id| self.arena.stmt(*id).span);
        let span = start.to(end);
        Ok(self
            .arena
            .alloc_stmt(StmtKind::If { branches, else_branch }, span))
    }

    fn parse_if_head(&mut self) -> Result<(ExprId, Vec<StmtId>), EvalError> {
        self.expect(TokenKind::If)?;
        self.parse_condition_and_block()
    }

    fn parse_condition_and_block(&mut self) -> Result<(ExprId, Vec<StmtId>), EvalError> {
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let block = self.parse_block()?;
        Ok((cond, block))
    }

    /// `for ([init]; [cond]; [post]) body` — the three clauses are parsed
    /// once into retained `Expr` nodes; each iteration re-evaluates them
    /// instead of re-seeking a token cursor (`spec.md` §9 REDESIGN FLAGS).
    fn parse_for(&mut self) -> Result<StmtId, EvalError> {
        let start = self.advance().span;
        self.expect(TokenKind::LParen)?;

        let init = if self.peek().kind == TokenKind::Semicolon {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon)?;

        let cond = if self.peek().kind == TokenKind::Semicolon {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon)?;

        let post = if self.peek().kind == TokenKind::RParen {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;
        Ok(self.arena.alloc_stmt(
            StmtKind::For {
                init,
                cond,
                post,
                body,
            },
            start,
        ))
    }

    fn parse_while(&mut self) -> Result<StmtId, EvalError> {
        let start = self.advance().span;
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(self.arena.alloc_stmt(StmtKind::While { cond, body }, start))
    }

    fn parse_expression_statement(&mut self) -> Result<StmtId, EvalError> {
        let expr = self.parse_expression()?;
        let span = self.arena.expr(expr).span;
        let end = self.expect(TokenKind::Semicolon)?.span;
        Ok(self.arena.alloc_stmt(StmtKind::Expr(expr), span.to(end)))
    }

    // ---- expressions ---------------------------------------------------

    fn parse_expression(&mut self) -> Result<ExprId, EvalError> {
        self.parse_assignment()
    }

    /// Assignment is right-associative; the left side must be a bare
    /// identifier immediately followed by `=` or `+=` (`spec.md` §4.3).
    fn parse_assignment(&mut self) -> Result<ExprId, EvalError> {
        if let TokenKind::Ident(name) = self.peek().kind {
            let op = match self.peek_at(1).map(|t| t.kind) {
                Some(TokenKind::Eq) => Some(AssignOp::Set),
                Some(TokenKind::PlusEq) => Some(AssignOp::AddAssign),
                _ => None,
            };
            if let Some(op) = op {
                let start = self.advance().span; // identifier
                self.advance(); // operator
                let value = self.parse_assignment()?;
                let span = start.to(self.arena.expr(value).span);
                return Ok(self.arena.alloc_expr(ExprKind::Assign { name, op, value }, span));
            }
        }
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<ExprId, EvalError> {
        let mut lhs = self.parse_and()?;
        while self.peek().kind == TokenKind::OrOr {
            self.advance();
            let rhs = self.parse_and()?;
            lhs = self.binary(BinaryOp::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<ExprId, EvalError> {
        let mut lhs = self.parse_equality()?;
        while self.peek().kind == TokenKind::AndAnd {
            self.advance();
            let rhs = self.parse_equality()?;
            lhs = self.binary(BinaryOp::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_equality(&mut self) -> Result<ExprId, EvalError> {
        let mut lhs = self.parse_relational()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::NotEq,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_relational()?;
            lhs = self.binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_relational(&mut self) -> Result<ExprId, EvalError> {
        let mut lhs = self.parse_additive()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::GtEq => BinaryOp::GtEq,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_additive()?;
            lhs = self.binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_additive(&mut self) -> Result<ExprId, EvalError> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = self.binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, EvalError> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = self.binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    /// Prefix `!`, unary `-`, and prefix `++`/`--` (`spec.md` §4.3). Unary
    /// `-` recurses into `parse_unary` rather than only matching a literal,
    /// so it applies to any primary expression (`spec.md` §9 Open Question).
    fn parse_unary(&mut self) -> Result<ExprId, EvalError> {
        match self.peek().kind {
            TokenKind::Bang => {
                let start = self.advance().span;
                let operand = self.parse_unary()?;
                let span = start.to(self.arena.expr(operand).span);
                Ok(self
                    .arena
                    .alloc_expr(ExprKind::Unary { op: UnaryOp::Not, operand }, span))
            }
            TokenKind::Minus => {
                let start = self.advance().span;
                let operand = self.parse_unary()?;
                let span = start.to(self.arena.expr(operand).span);
                Ok(self
                    .arena
                    .alloc_expr(ExprKind::Unary { op: UnaryOp::Neg, operand }, span))
            }
            TokenKind::PlusPlus | TokenKind::MinusMinus => {
                let op_token = self.advance();
                let op = if op_token.kind == TokenKind::PlusPlus {
                    IncDecOp::Inc
                } else {
                    IncDecOp::Dec
                };
                let (name, ident_span) = self.expect_ident()?;
                let span = op_token.span.to(ident_span);
                Ok(self.arena.alloc_expr(ExprKind::PrefixIncDec { name, op }, span))
            }
            _ => self.parse_primary(),
        }
    }

    /// Literals, parenthesised expressions, identifiers, calls, postfix
    /// `++`/`--`, and chained `[...]` indexing (`spec.md` §4.3).
    fn parse_primary(&mut self) -> Result<ExprId, EvalError> {
        let token = self.peek();
        match token.kind {
            TokenKind::Int(n) => {
                self.advance();
                Ok(self.arena.alloc_expr(ExprKind::Int(n), token.span))
            }
            TokenKind::Double(n) => {
                self.advance();
                Ok(self.arena.alloc_expr(ExprKind::Double(n), token.span))
            }
            TokenKind::Bool(b) => {
                self.advance();
                Ok(self.arena.alloc_expr(ExprKind::Bool(b), token.span))
            }
            TokenKind::Str(name) => {
                self.advance();
                Ok(self.arena.alloc_expr(ExprKind::Str(name), token.span))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Ident(name) => self.parse_ident_primary(name, token.span),
            _ => Err(EvalError::unexpected_token(
                format!("unexpected token {}", token.kind),
                token.span,
            )),
        }
    }

    fn parse_ident_primary(&mut self, name: Name, span: Span) -> Result<ExprId, EvalError> {
        self.advance();

        if self.peek().kind == TokenKind::LParen {
            return self.parse_call(name, span);
        }

        if self.peek().kind == TokenKind::PlusPlus || self.peek().kind == TokenKind::MinusMinus {
            let op_token = self.advance();
            let op = if op_token.kind == TokenKind::PlusPlus {
                IncDecOp::Inc
            } else {
                IncDecOp::Dec
            };
            return Ok(self
                .arena
                .alloc_expr(ExprKind::PostfixIncDec { name, op }, span.to(op_token.span)));
        }

        if self.peek().kind == TokenKind::LBracket {
            return self.parse_index(name, span);
        }

        Ok(self.arena.alloc_expr(ExprKind::Ident(name), span))
    }

    fn parse_call(&mut self, callee: Name, start: Span) -> Result<ExprId, EvalError> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if self.peek().kind != TokenKind::RParen {
            loop {
                args.push(self.parse_assignment()?);
                if self.peek().kind == TokenKind::Comma {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        let end = self.expect(TokenKind::RParen)?.span;
        Ok(self
            .arena
            .alloc_expr(ExprKind::Call { callee, args }, start.to(end)))
    }

    fn parse_index(&mut self, name: Name, start: Span) -> Result<ExprId, EvalError> {
        let base = self.arena.alloc_expr(ExprKind::Ident(name), start);
        let mut indices = Vec::new();
        let mut end = start;
        while self.peek().kind == TokenKind::LBracket {
            self.advance();
            indices.push(self.parse_expression()?);
            end = self.expect(TokenKind::RBracket)?.span;
        }
        Ok(self
            .arena
            .alloc_expr(ExprKind::Index { base, indices }, start.to(end)))
    }

    fn binary(&mut self, op: BinaryOp, lhs: ExprId, rhs: ExprId) -> ExprId {
        let span = self.arena.expr(lhs).span.to(self.arena.expr(rhs).span);
        self.arena.alloc_expr(ExprKind::Binary { op, lhs, rhs }, span)
    }
}

/// Parse a full token stream into a top-level statement sequence plus the
/// arena that owns every node it references.
pub fn parse(tokens: &[Token]) -> Result<(Vec<StmtId>, ExprArena), EvalError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use arcane_ir::StringInterner;
    use pretty_assertions::assert_eq;

    fn parse_source(source: &str) -> (Vec<StmtId>, ExprArena) {
        let mut interner = StringInterner::new();
        let tokens = arcane_lexer::lex(source, &mut interner).expect("lex should succeed");
        parse(&tokens).expect("parse should succeed")
    }

    #[test]
    fn parses_assignment_statement() {
        let (stmts, arena) = parse_source("a = 5;");
        assert_eq!(stmts.len(), 1);
        match &arena.stmt(stmts[0]).kind {
            StmtKind::Expr(expr) => match &arena.expr(*expr).kind {
                ExprKind::Assign { op, .. } => assert_eq!(*op, AssignOp::Set),
                other => panic!("expected assign, got {other:?}"),
            },
            other => panic!("expected expr statement, got {other:?}"),
        }
    }

    #[test]
    fn parses_nested_if_else_if_chain() {
        let (stmts, arena) = parse_source("if (a) { b; } else if (c) { d; } else { e; }");
        match &arena.stmt(stmts[0]).kind {
            StmtKind::If { branches, else_branch } => {
                assert_eq!(branches.len(), 2);
                assert!(else_branch.is_some());
            }
            other => panic!("expected if statement, got {other:?}"),
        }
    }

    #[test]
    fn parses_for_loop_clauses() {
        let (stmts, arena) = parse_source("for (i = 0; i < 3; i++) { print(i); }");
        match &arena.stmt(stmts[0]).kind {
            StmtKind::For { init, cond, post, body } => {
                assert!(init.is_some());
                assert!(cond.is_some());
                assert!(post.is_some());
                assert_eq!(body.len(), 1);
            }
            other => panic!("expected for statement, got {other:?}"),
        }
    }

    #[test]
    fn parses_chained_index_access() {
        let (stmts, arena) = parse_source("x = a[0][1];");
        let StmtKind::Expr(expr) = &arena.stmt(stmts[0]).kind else {
            panic!("expected expr statement")
        };
        let ExprKind::Assign { value, .. } = &arena.expr(*expr).kind else {
            panic!("expected assign expr")
        };
        match &arena.expr(*value).kind {
            ExprKind::Index { indices, .. } => assert_eq!(indices.len(), 2),
            other => panic!("expected index, got {other:?}"),
        }
    }
}
